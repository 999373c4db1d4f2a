use crate::error::{CutoutError, Result};
use crate::utils::constants::{COORDINATE_DECIMALS, PIXSCALE_DECIMALS};
use url::Url;

/// Round `value` to `decimals` places, ties to the even digit.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Decimal text for a query value; whole numbers keep a trailing `.0`.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Arcseconds per pixel for a square cutout.
///
/// A zero or negative pixel count is not rejected and yields a non-finite or
/// negative scale.
pub fn pixel_scale(size_arcmin: f64, size_pix: u32) -> f64 {
    (60.0 * size_arcmin) / size_pix as f64
}

/// Build the cutout service URL for one position.
///
/// Coordinates are rounded to 5 decimal places and the pixel scale to 4.
/// Out-of-range coordinates are passed through untouched.
///
/// # Examples
/// ```
/// use cutout_fetcher::utils::cutout_url::make_url;
/// use url::Url;
///
/// let base = Url::parse("http://legacysurvey.org/viewer").unwrap();
/// let url = make_url(&base, 180.0, 30.123456, "ls-dr9", 3.0, 512, "fits").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "http://legacysurvey.org/viewer/cutout.fits?ra=180.0&dec=30.12346&layer=ls-dr9&pixscale=0.3516&size=512"
/// );
/// ```
pub fn make_url(
    base_url: &Url,
    ra: f64,
    dec: f64,
    survey: &str,
    size_arcmin: f64,
    size_pix: u32,
    format: &str,
) -> Result<Url> {
    let ra = round_to(ra, COORDINATE_DECIMALS);
    let dec = round_to(dec, COORDINATE_DECIMALS);
    let pixscale = round_to(pixel_scale(size_arcmin, size_pix), PIXSCALE_DECIMALS);

    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| {
            CutoutError::Config(format!("Base URL '{}' cannot take a path", base_url))
        })?
        .pop_if_empty()
        .push(&format!("cutout.{}", format));

    url.query_pairs_mut()
        .clear()
        .append_pair("ra", &format_decimal(ra))
        .append_pair("dec", &format_decimal(dec))
        .append_pair("layer", survey)
        .append_pair("pixscale", &format_decimal(pixscale))
        .append_pair("size", &size_pix.to_string());

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn base() -> Url {
        Url::parse("http://legacysurvey.org/viewer").unwrap()
    }

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_pixel_scale_rounding() {
        assert!((pixel_scale(3.0, 512) - 0.3515625).abs() < 1e-12);
        assert_eq!(round_to(pixel_scale(3.0, 512), PIXSCALE_DECIMALS), 0.3516);
    }

    #[test]
    fn test_ties_round_to_even() {
        let url = make_url(&base(), 0.015625, 2.0, "dr8", 1.5, 320, "fits").unwrap();
        let params = query(&url);
        assert_eq!(params["ra"], "0.01562");
        assert_eq!(params["dec"], "2.0");
        assert_eq!(params["pixscale"], "0.2812");

        assert_eq!(round_to(-2.5, 0), -2.0);
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(180.0), "180.0");
        assert_eq!(format_decimal(-0.0), "-0.0");
        assert_eq!(format_decimal(0.3516), "0.3516");
        assert_eq!(format_decimal(f64::INFINITY), "inf");
    }

    #[test]
    fn test_make_url_layout() {
        let url = make_url(&base(), 150.1, 2.2, "ls-dr9", 3.0, 512, "fits").unwrap();
        assert_eq!(
            url.as_str(),
            "http://legacysurvey.org/viewer/cutout.fits?ra=150.1&dec=2.2&layer=ls-dr9&pixscale=0.3516&size=512"
        );
    }

    #[test]
    fn test_make_url_trailing_slash_base() {
        let base = Url::parse("http://localhost:8080/viewer/").unwrap();
        let url = make_url(&base, 1.0, 2.0, "dr8", 1.0, 60, "jpg").unwrap();
        assert_eq!(url.path(), "/viewer/cutout.jpg");
    }

    #[test]
    fn test_query_round_trips_rounded_values() {
        let positions = [
            (0.0, 0.0),
            (359.999999, -89.999994),
            (123.456789, 45.678901),
            (10.5, -0.000004),
            (210.802428, 54.348750),
        ];

        for (ra, dec) in positions {
            let url = make_url(&base(), ra, dec, "ls-dr9", 2.5, 256, "fits").unwrap();
            let params = query(&url);

            let parsed_ra: f64 = params["ra"].parse().unwrap();
            let parsed_dec: f64 = params["dec"].parse().unwrap();
            let parsed_scale: f64 = params["pixscale"].parse().unwrap();

            assert_eq!(parsed_ra, round_to(ra, 5));
            assert_eq!(parsed_dec, round_to(dec, 5));
            assert_eq!(parsed_scale, round_to(60.0 * 2.5 / 256.0, 4));
            assert_eq!(params["size"], "256");
            assert_eq!(params["layer"], "ls-dr9");
        }
    }

    #[test]
    fn test_out_of_range_coordinates_pass_through() {
        let url = make_url(&base(), 725.0, -100.0, "dr8", 3.0, 512, "fits").unwrap();
        let params = query(&url);
        assert_eq!(params["ra"], "725.0");
        assert_eq!(params["dec"], "-100.0");
    }

    #[test]
    fn test_zero_pixel_size_is_not_guarded() {
        let url = make_url(&base(), 1.0, 1.0, "dr8", 3.0, 0, "fits").unwrap();
        assert_eq!(query(&url)["pixscale"], "inf");
    }
}
