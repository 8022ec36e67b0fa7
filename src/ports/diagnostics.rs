/// Port for operator-facing progress and warning lines.
///
/// Messages never enter the expanded document.
pub trait Diagnostics {
    fn emit(&self, message: &str);
}
