/// One sky position to fetch, taken from a row of the target table.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub name: String,
    pub ra: f64,
    pub dec: f64,
}

impl Target {
    pub fn new(name: impl Into<String>, ra: f64, dec: f64) -> Self {
        Self {
            name: name.into(),
            ra,
            dec,
        }
    }
}
