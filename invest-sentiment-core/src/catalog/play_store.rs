use {
    async_trait::async_trait,
    once_cell::sync::Lazy,
    regex::Regex,
    reqwest::StatusCode,
    serde_json::Value,
    tracing::debug,
    crate::{
        catalog::{AppEntry, AppListing, CatalogLookup},
        config::CatalogConfig,
        error::{Error, Result},
    },
};

// the details page embeds listing data as `AF_initDataCallback({key: 'ds:5', ..., data: [...], sideChannel: {}});`
static DETAILS_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)AF_initDataCallback\(\{key:\s*'ds:5'.*?data:(.*?), sideChannel: \{\}\}\);").expect("static pattern")
});

const TITLE: &[usize] = &[1, 2, 0, 0];
const SCORE: &[usize] = &[1, 2, 51, 0, 1];
const RATINGS: &[usize] = &[1, 2, 51, 2, 1];
const INSTALLS: &[usize] = &[1, 2, 13, 0];
const DEVELOPER: &[usize] = &[1, 2, 68, 0];

pub struct PlayStoreCatalog {
    client: reqwest::Client,
    endpoint: String,
    language: String,
    country: String,
}

impl PlayStoreCatalog {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint(),
            language: config.language(),
            country: config.country(),
        }
    }

    async fn details_page(&self, package_id: &str) -> Result<String> {
        let res = self.client.get(&self.endpoint)
            .query(&[("id", package_id), ("hl", self.language.as_str()), ("gl", self.country.as_str())])
            .send()
            .await
            .map_err(|err| Error::fetch(package_id, err))?;

        if res.status() != StatusCode::OK {
            return Err(Error::fetch(package_id, format!("store returned status: {}", res.status().as_u16())));
        }

        res.text().await.map_err(|err| Error::fetch(package_id, err))
    }
}

#[async_trait]
impl CatalogLookup for PlayStoreCatalog {
    async fn lookup(&self, app: &AppEntry) -> Result<AppListing> {
        debug!("fetching store listing for {}", app.package_id);
        let page = self.details_page(&app.package_id).await?;
        parse_listing(app, &page)
    }
}

pub fn parse_listing(app: &AppEntry, page: &str) -> Result<AppListing> {
    let block = DETAILS_BLOCK.captures(page)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| Error::fetch(&app.package_id, "listing data not found in page"))?;

    let data: Value = serde_json::from_str(block.as_str())
        .map_err(|err| Error::fetch(&app.package_id, format!("invalid listing data: {}", err)))?;

    let title = nested(&data, TITLE).and_then(Value::as_str).unwrap_or(&app.name);

    Ok(AppListing {
        name: app.name.clone(),
        package_id: app.package_id.clone(),
        title: title.to_owned(),
        score: nested(&data, SCORE).and_then(Value::as_f64),
        ratings: nested(&data, RATINGS).and_then(Value::as_u64),
        installs: nested(&data, INSTALLS).and_then(Value::as_str).map(|v| v.to_owned()),
        developer: nested(&data, DEVELOPER).and_then(Value::as_str).map(|v| v.to_owned()),
    })
}

fn nested<'a>(value: &'a Value, path: &[usize]) -> Option<&'a Value> {
    path.iter().try_fold(value, |value, index| value.get(*index))
}

#[cfg(test)]
mod tests {
    use {
        serde_json::json,
        super::*,
    };

    fn listing_data(score: Value, ratings: Value) -> Value {
        let mut details = vec![Value::Null; 69];
        details[0] = json!(["Bibit - Reksa Dana & Saham"]);
        details[13] = json!(["10.000.000+", 10_000_000]);
        details[51] = json!([[null, score], null, [null, ratings]]);
        details[68] = json!(["PT Bibit Tumbuh Bersama"]);

        json!([null, [null, null, details]])
    }

    fn page(data: &Value) -> String {
        format!(
            "<html><script>AF_initDataCallback({{key: 'ds:3', hash: '1', data:[1], sideChannel: {{}}}});</script>\
             <script>AF_initDataCallback({{key: 'ds:5', hash: '7', data:{}, sideChannel: {{}}}});</script></html>",
            data,
        )
    }

    fn bibit() -> AppEntry {
        AppEntry::new("Bibit", "com.bibit.bibitid")
    }

    #[test]
    fn extracts_listing_fields() {
        let listing = parse_listing(&bibit(), &page(&listing_data(json!(4.6321), json!(512_345)))).unwrap();

        assert_eq!(listing.name, "Bibit");
        assert_eq!(listing.package_id, "com.bibit.bibitid");
        assert_eq!(listing.title, "Bibit - Reksa Dana & Saham");
        assert_eq!(listing.score, Some(4.6321));
        assert_eq!(listing.ratings, Some(512_345));
        assert_eq!(listing.installs.as_deref(), Some("10.000.000+"));
        assert_eq!(listing.developer.as_deref(), Some("PT Bibit Tumbuh Bersama"));
    }

    #[test]
    fn unrated_listing_has_no_score() {
        let listing = parse_listing(&bibit(), &page(&listing_data(Value::Null, Value::Null))).unwrap();

        assert_eq!(listing.score, None);
        assert_eq!(listing.ratings, None);
    }

    #[test]
    fn page_without_listing_data_is_a_fetch_error() {
        let err = parse_listing(&bibit(), "<html>captcha</html>").unwrap_err();

        assert!(matches!(err, Error::Fetch { ref package_id, .. } if package_id == "com.bibit.bibitid"));
    }

    #[test]
    fn malformed_listing_data_is_a_fetch_error() {
        let page = "AF_initDataCallback({key: 'ds:5', hash: '7', data:[1, 2, , sideChannel: {}});";

        assert!(matches!(parse_listing(&bibit(), page), Err(Error::Fetch { .. })));
    }

    #[test]
    fn title_falls_back_to_app_name() {
        let page = page(&json!([null, [null, null, []]]));

        assert_eq!(parse_listing(&bibit(), &page).unwrap().title, "Bibit");
    }

    #[tokio::test]
    async fn unreachable_store_is_a_fetch_error() {
        let config: CatalogConfig = toml::from_str("endpoint = \"http://127.0.0.1:9/details\"").unwrap();
        let catalog = PlayStoreCatalog::new(&config);

        let err = catalog.lookup(&bibit()).await.unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }
}
