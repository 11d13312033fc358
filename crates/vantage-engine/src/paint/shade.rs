use super::Color;

/// Distance-based darkening applied by the compositor.
///
/// `amount` is `distance / light_depth`; `0` leaves the color unchanged and
/// larger values produce darker output. The exact curve belongs to the
/// implementing color type.
pub trait Shade: Sized {
    fn darken(&self, amount: f64) -> Self;
}

impl Shade for Color {
    /// Scales HSL lightness by `1 - amount`, clamped to `[0, 1]`.
    ///
    /// Hue, saturation and alpha are preserved; negative amounts lighten.
    fn darken(&self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Color::from_hsl(h, s, l - l * amount, self.a)
    }
}
