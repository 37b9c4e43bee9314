//! Surface format and error policy for frames copied in from the CPU.

use super::SurfaceErrorAction;

/// 8-bit formats a CPU frame can be copied into byte for byte, most
/// preferred first.
const COPYABLE: [wgpu::TextureFormat; 4] = [
    wgpu::TextureFormat::Rgba8UnormSrgb,
    wgpu::TextureFormat::Bgra8UnormSrgb,
    wgpu::TextureFormat::Rgba8Unorm,
    wgpu::TextureFormat::Bgra8Unorm,
];

pub(crate) fn pick_format(offered: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    COPYABLE.into_iter().find(|f| offered.contains(f))
}

/// Whether frame bytes must be swizzled to B, G, R, A.
pub(crate) fn is_bgra(format: wgpu::TextureFormat) -> bool {
    matches!(format, wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Bgra8UnormSrgb)
}

pub(crate) fn pick_alpha_mode(
    offered: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    match requested {
        Some(m) if offered.contains(&m) => m,
        _ => offered.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
    }
}

impl From<&wgpu::SurfaceError> for SurfaceErrorAction {
    fn from(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigure,
            wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, SurfaceError, TextureFormat};

    #[test]
    fn prefers_srgb_rgba_and_skips_float_formats() {
        let offered = [TextureFormat::Rgba16Float, TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(pick_format(&offered), Some(TextureFormat::Bgra8UnormSrgb));
        assert_eq!(pick_format(&[TextureFormat::Rgba16Float]), None);
        assert!(is_bgra(TextureFormat::Bgra8UnormSrgb));
        assert!(!is_bgra(TextureFormat::Rgba8Unorm));
    }

    #[test]
    fn alpha_mode_falls_back_to_first_offered() {
        let offered = [CompositeAlphaMode::PreMultiplied, CompositeAlphaMode::Opaque];
        assert_eq!(pick_alpha_mode(&offered, Some(CompositeAlphaMode::Opaque)), CompositeAlphaMode::Opaque);
        assert_eq!(
            pick_alpha_mode(&offered, Some(CompositeAlphaMode::PostMultiplied)),
            CompositeAlphaMode::PreMultiplied
        );
        assert_eq!(pick_alpha_mode(&[], None), CompositeAlphaMode::Auto);
    }

    #[test]
    fn error_policy() {
        assert_eq!(SurfaceErrorAction::from(&SurfaceError::Outdated), SurfaceErrorAction::Reconfigure);
        assert_eq!(SurfaceErrorAction::from(&SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(SurfaceErrorAction::from(&SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
