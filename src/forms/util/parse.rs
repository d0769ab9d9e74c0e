use regex::Regex;

lazy_static! {
    pub static ref FLOAT_PREFIX_REGEX: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
    pub static ref INT_PREFIX_REGEX: Regex = Regex::new(r"^[+-]?\d+").unwrap();
}

/// Parses the leading decimal number of `raw`, ignoring whatever trails it.
/// Zero and non-finite results count as missing.
pub fn lenient_float(raw: Option<&str>, default: f64) -> f64 {
    let Some(raw) = raw else {
        return default;
    };
    let Some(prefix) = FLOAT_PREFIX_REGEX.find(raw.trim_start()) else {
        return default;
    };

    match prefix.as_str().parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => default,
    }
}

/// Integer counterpart of [`lenient_float`]; fractional parts are dropped.
/// Values outside `i64` count as missing.
pub fn lenient_int(raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw else {
        return default;
    };
    let Some(prefix) = INT_PREFIX_REGEX.find(raw.trim_start()) else {
        return default;
    };

    match prefix.as_str().parse::<i64>() {
        Ok(value) if value != 0 => value,
        _ => default,
    }
}

pub fn comma_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(|segment| segment.trim())
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .collect()
}

pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_falls_back_on_garbage() {
        assert_eq!(lenient_float(Some("abc"), 0.9), 0.9);
        assert_eq!(lenient_float(Some(""), 0.9), 0.9);
        assert_eq!(lenient_float(Some("   "), 0.9), 0.9);
        assert_eq!(lenient_float(None, 0.9), 0.9);
        assert_eq!(lenient_float(Some("."), 0.9), 0.9);
    }

    #[test]
    fn float_reads_leading_number() {
        assert_eq!(lenient_float(Some("0.5"), 0.9), 0.5);
        assert_eq!(lenient_float(Some("  1.25degrees"), 0.9), 1.25);
        assert_eq!(lenient_float(Some(".75"), 0.9), 0.75);
        assert_eq!(lenient_float(Some("-.5"), 0.9), -0.5);
        assert_eq!(lenient_float(Some("2e-1x"), 0.9), 0.2);
        assert_eq!(lenient_float(Some("3e"), 0.9), 3.0);
    }

    #[test]
    fn float_zero_uses_default() {
        assert_eq!(lenient_float(Some("0"), 0.9), 0.9);
        assert_eq!(lenient_float(Some("0.0"), 0.9), 0.9);
        assert_eq!(lenient_float(Some("1e999"), 0.9), 0.9);
    }

    #[test]
    fn int_truncates_and_falls_back() {
        assert_eq!(lenient_int(Some("32"), 64), 32);
        assert_eq!(lenient_int(Some("3.7"), 64), 3);
        assert_eq!(lenient_int(Some("12abc"), 64), 12);
        assert_eq!(lenient_int(Some("-8"), 64), -8);
        assert_eq!(lenient_int(Some("abc"), 64), 64);
        assert_eq!(lenient_int(Some("0"), 64), 64);
        assert_eq!(lenient_int(Some(".5"), 64), 64);
    }

    #[test]
    fn int_out_of_range_uses_default() {
        assert_eq!(lenient_int(Some("99999999999999999999"), 64), 64);
        assert_eq!(lenient_int(Some("-99999999999999999999"), 2048), 2048);
    }

    #[test]
    fn comma_list_drops_blank_segments() {
        assert_eq!(comma_list(Some("text, ,image")), vec!["text", "image"]);
        assert_eq!(comma_list(Some(" audio ,,")), vec!["audio"]);
        assert!(comma_list(Some("")).is_empty());
        assert!(comma_list(None).is_empty());
    }

    #[test]
    fn empty_optional_is_absent() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" ".to_string())), Some(" ".to_string()));
        assert_eq!(
            non_empty(Some("lnbc1".to_string())),
            Some("lnbc1".to_string())
        );
    }
}
