use crate::blob::Cursor;
use crate::error::DecodeError;

use super::{Color, ColorModel, ColorReader};

const RGB_TAG: u8 = 0x96;
const CMYK_TAG: u8 = 0x97;
const HSV_TAG: u8 = 0x92;
const HLS_TAG: u8 = 0x93;
const GRAY_TAG: u8 = 0x94;

// D65 reference white.
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

/// Default color reader.
///
/// The model tag is a single byte (the first byte of the color class id,
/// whose remaining bytes are the color magic checked by the grammar). A
/// record is three little-endian `f64` CIELAB components followed by a
/// dither byte and a null byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabColorReader;

impl LabColorReader {
    pub const RECORD_LEN: usize = 26;

    pub fn model_tag(model: ColorModel) -> u8 {
        match model {
            ColorModel::Rgb => RGB_TAG,
            ColorModel::Cmyk => CMYK_TAG,
            ColorModel::Hsv => HSV_TAG,
            ColorModel::Hls => HLS_TAG,
            ColorModel::Gray => GRAY_TAG,
        }
    }
}

impl ColorReader for LabColorReader {
    fn read_color_model(&self, cursor: &mut Cursor<'_>) -> Result<ColorModel, DecodeError> {
        let offset = cursor.tell();
        match cursor.read_u8()? {
            RGB_TAG => Ok(ColorModel::Rgb),
            CMYK_TAG => Ok(ColorModel::Cmyk),
            HSV_TAG => Ok(ColorModel::Hsv),
            HLS_TAG => Ok(ColorModel::Hls),
            GRAY_TAG => Ok(ColorModel::Gray),
            tag => Err(DecodeError::UnknownColorModel { offset, tag }),
        }
    }

    fn read_color(&self, cursor: &mut Cursor<'_>) -> Result<Color, DecodeError> {
        let l = cursor.read_f64_le()?;
        let a = cursor.read_f64_le()?;
        let b = cursor.read_f64_le()?;
        let dither = cursor.read_u8()? != 0;
        let is_null = cursor.read_u8()? != 0;
        let (red, green, blue) = lab_to_srgb(l, a, b);
        Ok(Color {
            red,
            green,
            blue,
            dither,
            is_null,
        })
    }
}

fn lab_to_srgb(l: f64, a: f64, b: f64) -> (u8, u8, u8) {
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let x = WHITE_X * lab_f_inv(fx) / 100.0;
    let y = WHITE_Y * lab_f_inv(fy) / 100.0;
    let z = WHITE_Z * lab_f_inv(fz) / 100.0;

    let r = 3.2406 * x - 1.5372 * y - 0.4986 * z;
    let g = -0.9689 * x + 1.8758 * y + 0.0415 * z;
    let bl = 0.0557 * x - 0.2040 * y + 1.0570 * z;

    (to_channel(r), to_channel(g), to_channel(bl))
}

fn lab_f_inv(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

fn to_channel(linear: f64) -> u8 {
    let encoded = if linear > 0.003_130_8 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    };
    if encoded.is_nan() {
        return 0;
    }
    (encoded.clamp(0.0, 1.0) * 255.0).round() as u8
}
