use {
    tracing::Level,
    tracing_subscriber::{prelude::*, filter::filter_fn},
};

pub fn init_logging() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .finish()
        .with(filter_fn(|metadata| {
            if is_http_client_target(metadata.target()) {
                metadata.level() <= &Level::WARN
            } else {
                true
            }
        }))
        .init();
}

fn is_http_client_target(target: &str) -> bool {
    target.starts_with("reqwest") || target.starts_with("hyper")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_client_targets_are_recognized() {
        assert!(is_http_client_target("reqwest::connect"));
        assert!(is_http_client_target("hyper::client::pool"));
        assert!(!is_http_client_target("invest_sentiment_core::catalog::ranking"));
    }
}
