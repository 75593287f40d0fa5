//! Scheme-agnostic query construction

use domain::GeoPoint;
use url::form_urlencoded;

/// Legacy parameter the upstream API has always received first
pub const SENSOR_PARAM: &str = "sensor=false";

/// Build the `address=` component for a forward geocode
///
/// The address is form-urlencoded: reserved characters are percent-escaped
/// and spaces become `+`.
pub fn geocode_query(address: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(address.as_bytes()).collect();
    format!("address={encoded}")
}

/// Build the `latlng=` component for a reverse geocode
pub fn reverse_geocode_query(point: GeoPoint) -> String {
    format!("latlng={},{}", point.latitude(), point.longitude())
}

/// Prefix operation parameters with [`SENSOR_PARAM`]
pub fn with_sensor(params: &str) -> String {
    format!("{SENSOR_PARAM}&{params}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_geocode_query_escapes_reserved_characters() {
        assert_eq!(
            geocode_query("1600 Amphitheatre Pkwy, Mountain View, CA"),
            "address=1600+Amphitheatre+Pkwy%2C+Mountain+View%2C+CA"
        );
        assert_eq!(geocode_query("a&b=c?d#e/f"), "address=a%26b%3Dc%3Fd%23e%2Ff");
        assert_eq!(geocode_query("1+1"), "address=1%2B1");
    }

    #[test]
    fn test_geocode_query_non_ascii() {
        assert_eq!(geocode_query("München"), "address=M%C3%BCnchen");
    }

    #[test]
    fn test_geocode_query_empty_address() {
        assert_eq!(geocode_query(""), "address=");
    }

    #[test]
    fn test_reverse_geocode_query_full_precision() {
        assert_eq!(
            reverse_geocode_query(GeoPoint::new(40.714_224, -73.961_452)),
            "latlng=40.714224,-73.961452"
        );
        assert_eq!(
            reverse_geocode_query(GeoPoint::new(51.507_351_234_5, -0.127_758)),
            "latlng=51.5073512345,-0.127758"
        );
    }

    #[test]
    fn test_with_sensor() {
        assert_eq!(with_sensor("address=Paris"), "sensor=false&address=Paris");
    }

    proptest! {
        #[test]
        fn geocode_query_round_trips(address in "\\PC*") {
            let query = geocode_query(&address);
            let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect();
            prop_assert_eq!(pairs.len(), 1);
            prop_assert_eq!(pairs[0].0.as_str(), "address");
            prop_assert_eq!(pairs[0].1.as_str(), address.as_str());
        }

        #[test]
        fn geocode_query_has_no_raw_delimiters(address in "\\PC*") {
            let query = geocode_query(&address);
            let value = &query["address=".len()..];
            prop_assert!(!value.contains(['&', '=', '?', '#', ' ']));
        }
    }
}
