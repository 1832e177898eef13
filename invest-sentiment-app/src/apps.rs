use {
    invest_sentiment_core::catalog::AppEntry,
    crate::render,
};

pub fn apps_panel(apps: &[AppEntry]) -> String {
    let rows: Vec<Vec<String>> = apps.iter()
        .map(|app| vec![app.name.clone(), app.package_id.clone()])
        .collect();

    let mut out = render::header("Daftar Aplikasi");
    out.push_str(&render::table(&["Nama Aplikasi", "ID Paket Google Play"], &rows));
    out
}

#[cfg(test)]
mod tests {
    use {
        invest_sentiment_core::config::CatalogConfig,
        super::*,
    };

    #[test]
    fn lists_every_configured_app() {
        let apps = CatalogConfig::default().apps();

        let out = apps_panel(&apps);

        assert_eq!(out.lines().filter(|line| line.contains(" | ")).count(), apps.len() + 1);
        assert!(out.contains("com.bibit.bibitid"));
    }
}
