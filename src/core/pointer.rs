use glam::Vec2;

// Pointer-driven transform math: card tilt with glare, and the magnetic pull
// applied to call-to-action buttons. Pure functions over normalized pointer
// samples; the event layer feeds samples in and writes the results to styles.

/// Tunables for the tilt effect.
#[derive(Clone, Copy, Debug)]
pub struct TiltSettings {
    pub max_tilt_deg: f32,
    pub perspective_px: f32,
    pub scale: f32,
    pub max_glare: f32,
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self {
            max_tilt_deg: 15.0,
            perspective_px: 1000.0,
            scale: 1.05,
            max_glare: 0.3,
        }
    }
}

/// One frame of tilt output, ready to be formatted into a CSS transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
    pub perspective_px: f32,
}

impl TiltTransform {
    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
            self.perspective_px,
            self.rotate_x_deg,
            self.rotate_y_deg,
            s = self.scale
        )
    }
}

/// Glare highlight derived from the same pointer sample as the tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlareFrame {
    pub opacity: f32,
    pub center_x_pct: f32,
    pub center_y_pct: f32,
}

impl GlareFrame {
    pub fn background_css(&self) -> String {
        format!(
            "radial-gradient(circle at {}% {}%, rgba(255, 221, 53, {}), transparent 80%)",
            self.center_x_pct, self.center_y_pct, self.opacity
        )
    }
}

/// Tilt for a normalized pointer offset with components in [0, 1].
///
/// Both rotations are linear in the offset from the element center and zero
/// at (0.5, 0.5); the horizontal offset drives rotation around Y with the
/// sign flipped so the card leans toward the pointer.
pub fn tilt_for(settings: TiltSettings, p: Vec2) -> TiltTransform {
    TiltTransform {
        rotate_x_deg: (p.y - 0.5) * 2.0 * settings.max_tilt_deg,
        rotate_y_deg: (p.x - 0.5) * -2.0 * settings.max_tilt_deg,
        scale: settings.scale,
        perspective_px: settings.perspective_px,
    }
}

/// Glare for a normalized pointer offset: opacity follows the average of the
/// two components, the gradient recenters on the pointer.
pub fn glare_for(settings: TiltSettings, p: Vec2) -> GlareFrame {
    GlareFrame {
        opacity: (p.x + p.y) / 2.0 * settings.max_glare,
        center_x_pct: p.x * 100.0,
        center_y_pct: p.y * 100.0,
    }
}

/// Maps pointer samples inside an element to a 3D tilt.
///
/// Element dimensions are cached and refreshed on pointer-enter, so
/// responsive layout changes are picked up without a per-move reflow.
pub struct TiltMapper {
    pub settings: TiltSettings,
    width: f32,
    height: f32,
}

impl TiltMapper {
    pub fn new(settings: TiltSettings) -> Self {
        Self {
            settings,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Normalized offsets of a pointer sample within the cached bounds.
    /// A zero dimension yields a non-finite offset; the resulting style
    /// value is ignored by the browser, which is accepted.
    pub fn normalized(&self, local: Vec2) -> Vec2 {
        Vec2::new(local.x / self.width, local.y / self.height)
    }

    pub fn sample(&self, local: Vec2) -> TiltTransform {
        tilt_for(self.settings, self.normalized(local))
    }

    pub fn glare(&self, local: Vec2) -> GlareFrame {
        glare_for(self.settings, self.normalized(local))
    }

    /// The settled state applied on pointer-leave: rotations back to zero,
    /// scale back to 1, perspective kept.
    pub fn rest(&self) -> TiltTransform {
        TiltTransform {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            scale: 1.0,
            perspective_px: self.settings.perspective_px,
        }
    }
}

/// Magnetic pull toward the pointer: offset from the element center,
/// normalized by the element dimension and scaled by `strength`. The
/// normalization bounds the translation to roughly `strength / 2` pixels.
pub fn magnet_offset(local: Vec2, size: Vec2, strength: f32) -> Vec2 {
    let centered = local - size * 0.5;
    Vec2::new(
        centered.x / size.x * strength,
        centered.y / size.y * strength,
    )
}
