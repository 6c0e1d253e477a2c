use chrono::NaiveDate;
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATE_BOUNDS: &str = "2021-01-01..2021-12-01";

pub struct Config {
    pub graphql_url: String,
    pub port: u16,
    pub date_bounds: (NaiveDate, NaiveDate),
}

impl Config {
    /// `modeshare-server <graphql-url>`, with `MODESHARE_PORT` and
    /// `MODESHARE_DATE_BOUNDS` (`YYYY-MM-DD..YYYY-MM-DD`) read from the environment.
    pub fn from_env() -> Result<Self, String> {
        let graphql_url = env::args()
            .nth(1)
            .ok_or_else(|| "Missing GraphQL endpoint url".to_string())?;

        let port = match env::var("MODESHARE_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|err| format!("Invalid MODESHARE_PORT {value}: {err}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let bounds = env::var("MODESHARE_DATE_BOUNDS")
            .unwrap_or_else(|_| DEFAULT_DATE_BOUNDS.to_string());
        let date_bounds = parse_bounds(&bounds)?;

        Ok(Self {
            graphql_url,
            port,
            date_bounds,
        })
    }
}

fn parse_bounds(value: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let (start, end) = value
        .split_once("..")
        .ok_or_else(|| format!("Date bounds {value} are not of the form start..end"))?;
    let start: NaiveDate = start
        .trim()
        .parse()
        .map_err(|err| format!("Invalid start date {start}: {err}"))?;
    let end: NaiveDate = end
        .trim()
        .parse()
        .map_err(|err| format!("Invalid end date {end}: {err}"))?;
    Ok((start, end))
}

#[test]
fn parse_default_bounds() {
    let (start, end) = parse_bounds(DEFAULT_DATE_BOUNDS).unwrap();
    assert_eq!(start, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    assert_eq!(end, NaiveDate::from_ymd_opt(2021, 12, 1).unwrap());
}

#[test]
fn parse_bounds_without_separator() {
    assert!(parse_bounds("2021-01-01").is_err());
}
