//! DTOs for per-link click statistics.

use serde::{Deserialize, Serialize};

/// Aggregated click statistics for one short link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClickStats {
    pub total_clicks: i64,
    pub daily_clicks: Vec<DailyClicks>,
    pub country_clicks: Vec<CountryClicks>,
    pub referer_clicks: Vec<RefererClicks>,
}

/// Clicks bucketed by calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyClicks {
    pub date: String,
    pub count: i64,
}

/// Clicks bucketed by visitor country.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryClicks {
    pub country: String,
    pub count: i64,
}

/// Clicks bucketed by referer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefererClicks {
    pub referer: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_backend_stats_shape() {
        let body = json!({
            "total_clicks": 128,
            "daily_clicks": [{ "date": "2026-03-05", "count": 12 }],
            "country_clicks": [{ "country": "DE", "count": 64 }],
            "referer_clicks": [{ "referer": "https://news.ycombinator.com", "count": 30 }]
        });

        let stats: ClickStats = serde_json::from_value(body).unwrap();
        assert_eq!(stats.total_clicks, 128);
        assert_eq!(stats.daily_clicks[0].date, "2026-03-05");
        assert_eq!(stats.country_clicks[0].count, 64);
    }
}
