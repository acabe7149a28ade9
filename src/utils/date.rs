use chrono::{Local, NaiveDateTime};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// second precision, local time, no zone marker
pub const EXPORT_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_export_time(time: NaiveDateTime) -> String {
    format!("{}", time.format(EXPORT_TIME_FMT))
}

// Clock supplies the moment an export is rendered
pub trait Clock: Sync + Send {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        format!("{}", time.format(DATE_FMT)).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::{Clock, format_export_time, serializer};

    // FixedClock pins the export time for tests
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct FixedClock(pub NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    pub(crate) fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 3, 7)
            .and_then(|d| d.and_hms_milli_opt(9, 5, 41, 870))
            .expect("valid date")
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[tokio::test]
    async fn test_should_format_export_time_to_seconds() {
        assert_eq!("2023-03-07 09:05:41", format_export_time(fixed_time()).as_str());
    }

    #[tokio::test]
    async fn test_should_serialize_and_parse_dates() {
        let stamped = Stamped { at: fixed_time() };
        let json = serde_json::to_string(&stamped).expect("should serialize");
        assert_eq!(r#"{"at":"2023-03-07T09:05:41.870"}"#, json.as_str());
        let parsed: Stamped = serde_json::from_str(json.as_str()).expect("should parse");
        assert_eq!(stamped, parsed);
    }

    #[tokio::test]
    async fn test_should_use_fixed_clock() {
        assert_eq!(fixed_time(), FixedClock(fixed_time()).now());
    }
}
