use crate::error::{CutoutError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters unsafe in a single path component, plus `%` itself.
const UNSAFE: &AsciiSet = &CONTROLS
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b':')
    .add(b'"')
    .add(b'/')
    .add(b'\\')
    .add(b'|')
    .add(b'?')
    .add(b'*');

/// Percent-encode characters that are unsafe in a single path component.
///
/// `%` is escaped too, so distinct inputs always give distinct outputs.
/// Non-ASCII characters are encoded as their UTF-8 bytes.
pub fn sanitize_component(component: &str) -> String {
    utf8_percent_encode(component, UNSAFE).to_string()
}

/// Identifier used in the filename.
///
/// Designation-style names such as `"SDSS J120000.00+300000.0"` lose the
/// catalog prefix before the first whitespace; other names are used verbatim.
pub fn base_identifier(objname: &str) -> &str {
    let trimmed = objname.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((_, rest)) => rest.trim(),
        None => trimmed,
    }
}

/// Build `{prefix}{identifier}_{suffix}.{format}` for an object.
///
/// # Examples
/// ```
/// use cutout_fetcher::utils::make_filename;
///
/// let name = make_filename("SDSS J120000.00+300000.0", "", "DECaLS-DR8", "fits").unwrap();
/// assert_eq!(name, "J120000.00+300000.0_DECaLS-DR8.fits");
/// ```
pub fn make_filename(objname: &str, prefix: &str, suffix: &str, format: &str) -> Result<String> {
    let identifier = sanitize_component(base_identifier(objname));
    if identifier.is_empty() || identifier == "." || identifier == ".." {
        return Err(CutoutError::InvalidName(objname.to_string()));
    }

    Ok(format!(
        "{}{}_{}.{}",
        sanitize_component(prefix),
        identifier,
        sanitize_component(suffix),
        sanitize_component(format)
    ))
}
