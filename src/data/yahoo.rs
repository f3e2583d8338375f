//! Yahoo Finance chart endpoint.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{StatusCode, Url};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::{PROVIDER, ProviderApiConfig};
use crate::data::fetcher::{FetchError, PriceFetcher};
use crate::domain::{PriceObservation, PriceSeries, Symbol};
use crate::utils::TimeUtils;
use crate::utils::time_utils::epoch_sec_to_utc;

#[derive(Deserialize, Debug)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Deserialize, Debug)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    meta: Option<ChartMeta>,
    // Absent when the session has no bars yet
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug)]
struct ChartMeta {
    // Exchange offset from UTC in seconds, e.g. -18000 for CME in winter
    gmtoffset: Option<i32>,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    // Minutes without a trade come back as null
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Turns a chart payload into a series. Only timestamps and closes are kept.
pub fn parse_chart_response(body: &str) -> Result<PriceSeries, FetchError> {
    let envelope: ChartEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    if let Some(err) = envelope.chart.error {
        return Err(FetchError::Provider(format!("{}: {}", err.code, err.description)));
    }

    let Some(result) = envelope.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(PriceSeries::empty());
    };

    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    let observations = result
        .timestamp
        .iter()
        .zip(closes)
        .filter_map(|(&ts, close)| {
            let close = close.filter(|c| c.is_finite())?;
            let timestamp = epoch_sec_to_utc(ts)?;
            Some(PriceObservation::new(timestamp, close))
        })
        .collect();

    let series = PriceSeries::new(observations);
    Ok(match result.meta.and_then(|m| m.gmtoffset) {
        Some(offset) => series.with_exchange_offset(offset),
        None => series,
    })
}

/// Maps an HTTP status plus body to a fetch result.
fn classify(status: StatusCode, body: &str) -> Result<PriceSeries, FetchError> {
    if status.is_success() {
        return parse_chart_response(body);
    }

    // Unknown symbols come back as 404 with a chart.error object; prefer that message
    match parse_chart_response(body) {
        Err(provider @ FetchError::Provider(_)) => Err(provider),
        _ => Err(FetchError::Status(status.as_u16())),
    }
}

/// Blocking HTTP fetcher. One GET per call, no retries.
pub struct YahooFetcher {
    client: Client,
    base_url: Url,
    range: &'static str,
    interval: &'static str,
}

impl YahooFetcher {
    pub fn new(config: ProviderApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid provider base url: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Provider base url cannot take a path: {}", config.base_url);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            range: PROVIDER.history.range,
            interval: TimeUtils::interval_to_string(PROVIDER.history.interval_ms),
        })
    }

    fn chart_url(&self, symbol: &Symbol) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new(), so this always succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v8", "finance", "chart", symbol.ticker()]);
        }
        url
    }
}

impl PriceFetcher for YahooFetcher {
    fn fetch(&self, symbol: &Symbol) -> Result<PriceSeries, FetchError> {
        let url = self.chart_url(symbol);

        let response = self
            .client
            .get(url)
            .query(&[("range", self.range), ("interval", self.interval)])
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        classify(status, &body)
    }

    fn signature(&self) -> &'static str {
        PROVIDER.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_BARS: &str = r#"{"chart":{"result":[{
        "meta":{"symbol":"ES=F","regularMarketPrice":99.9},
        "timestamp":[1700000120,1700000060,1700000180],
        "indicators":{"quote":[{"open":[1,2,3],"close":[101.25,100.0,99.9]}]}
    }],"error":null}}"#;

    #[test]
    fn parses_and_orders_closes() {
        let series = parse_chart_response(THREE_BARS).unwrap();
        let closes: Vec<f64> = series.observations().iter().map(|o| o.close).collect();
        assert_eq!(closes, vec![100.0, 101.25, 99.9]);
        assert_eq!(series.latest().unwrap().epoch_sec(), 1_700_000_180);
    }

    #[test]
    fn skips_null_closes() {
        let body = r#"{"chart":{"result":[{"timestamp":[1,2,3],
            "indicators":{"quote":[{"close":[10.0,null,12.0]}]}}],"error":null}}"#;
        let series = parse_chart_response(body).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn missing_timestamps_is_an_empty_series_not_an_error() {
        let body = r#"{"chart":{"result":[{"meta":{},"indicators":{"quote":[{}]}}],"error":null}}"#;
        let series = parse_chart_response(body).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn provider_error_object_is_surfaced() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        match parse_chart_response(body) {
            Err(FetchError::Provider(msg)) => assert!(msg.contains("delisted")),
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            parse_chart_response("<html>rate limited</html>"),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn exchange_offset_is_taken_from_meta() {
        // 2024-01-10 23:00Z and 2024-01-11 00:30Z, one New York evening
        let body = r#"{"chart":{"result":[{"meta":{"gmtoffset":-18000},"timestamp":[1704927600,1704933000],
            "indicators":{"quote":[{"close":[100.0,121.0]}]}}],"error":null}}"#;
        let series = parse_chart_response(body).unwrap();
        assert_eq!(series.trading_days().len(), 1);

        let without_meta = body.replace(r#""gmtoffset":-18000"#, "");
        let series = parse_chart_response(&without_meta).unwrap();
        assert_eq!(series.trading_days().len(), 2);
    }

    #[test]
    fn not_found_with_error_body_is_a_provider_error() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        assert!(matches!(
            classify(StatusCode::NOT_FOUND, body),
            Err(FetchError::Provider(_))
        ));
    }

    #[test]
    fn gateway_error_page_keeps_the_status_code() {
        let body = "<html><body>502 Bad Gateway</body></html>";
        assert_eq!(
            classify(StatusCode::BAD_GATEWAY, body),
            Err(FetchError::Status(502))
        );
    }

    #[test]
    fn success_status_parses_the_body() {
        let series = classify(StatusCode::OK, THREE_BARS).unwrap();
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn chart_url_escapes_symbol_into_path() {
        let fetcher = YahooFetcher::new(ProviderApiConfig::default()).unwrap();
        let url = fetcher.chart_url(&Symbol::from("DX-Y.NYB"));
        assert_eq!(
            url.as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/DX-Y.NYB"
        );
    }

    #[test]
    fn rejects_non_base_url() {
        let config = ProviderApiConfig {
            base_url: "mailto:someone@example.com".to_string(),
            ..Default::default()
        };
        assert!(YahooFetcher::new(config).is_err());
    }
}
