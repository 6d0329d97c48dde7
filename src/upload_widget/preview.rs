use std::fmt;
use std::sync::Arc;

/// Decoded RGBA pixels of the selected file, sized for display.
#[derive(Clone, PartialEq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<[u8]>,
}

impl fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PreviewImage({}x{})", self.width, self.height)
    }
}

pub fn decode_preview(bytes: &[u8], max_edge: u32) -> Result<PreviewImage, image::ImageError> {
    let image = image::load_from_memory(bytes)?;

    let image = if image.width() > max_edge || image.height() > max_edge {
        image.thumbnail(max_edge, max_edge)
    } else {
        image
    };

    let rgba = image.to_rgba8();

    Ok(PreviewImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw().into(),
    })
}
