use crate::error::Result;
use crate::utils::cutout_url::{make_url, pixel_scale};
use url::Url;

/// Parameters of a single cutout request, derived per target.
#[derive(Debug, Clone, PartialEq)]
pub struct CutoutRequest {
    pub ra: f64,
    pub dec: f64,
    pub survey: String,
    pub size_arcmin: f64,
    pub size_pix: u32,
    pub format: String,
}

impl CutoutRequest {
    pub fn new(
        ra: f64,
        dec: f64,
        survey: impl Into<String>,
        size_arcmin: f64,
        size_pix: u32,
        format: impl Into<String>,
    ) -> Self {
        Self {
            ra,
            dec,
            survey: survey.into(),
            size_arcmin,
            size_pix,
            format: format.into(),
        }
    }

    /// Arcseconds per pixel, unrounded.
    pub fn pixel_scale(&self) -> f64 {
        pixel_scale(self.size_arcmin, self.size_pix)
    }

    pub fn url(&self, base_url: &Url) -> Result<Url> {
        make_url(
            base_url,
            self.ra,
            self.dec,
            &self.survey,
            self.size_arcmin,
            self.size_pix,
            &self.format,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_scale() {
        let request = CutoutRequest::new(180.0, 30.0, "ls-dr9", 3.0, 512, "fits");
        assert!((request.pixel_scale() - 0.3515625).abs() < 1e-12);
    }

    #[test]
    fn test_url_uses_format() {
        let base = Url::parse("http://legacysurvey.org/viewer").unwrap();
        let request = CutoutRequest::new(10.0, -5.0, "vlass1.2", 1.0, 100, "jpg");
        let url = request.url(&base).unwrap();
        assert_eq!(url.path(), "/viewer/cutout.jpg");
        assert_eq!(
            url.query(),
            Some("ra=10.0&dec=-5.0&layer=vlass1.2&pixscale=0.6&size=100")
        );
    }
}
