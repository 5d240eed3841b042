//! Color packing words.
//!
//! A packed color is a 24-bit integer whose channel order follows the
//! interpreter's `rgbformat` setting (0 = RGB, 1 = GRB, 2 = BGR,
//! 3 = GBR, 4 = RBG, 5 = BRG), matching the wiring quirks of WS2812
//! strands. `hsv>` converts through the easyrgb integer algorithm;
//! `blend`/`ablend` mix packed colors channel-wise with a 0..100 ratio.

use strand::broadcast::ternary;
use strand::{Interp, Value};

/// Register the color words.
pub fn install(interp: &mut Interp) {
    interp.register("rgbformat", op_rgbformat);
    interp.register("rgb>", op_rgb_to_color);
    interp.register(">rgb", op_color_to_rgb);
    interp.register("hsv>", op_hsv);
    interp.register("blend", op_blend);
    interp.register("ablend", op_ablend);
}

fn pack(fmt: u8, r: i64, g: i64, b: i64) -> i64 {
    let (r, g, b) = (r & 0xff, g & 0xff, b & 0xff);
    let (hi, mid, lo) = match fmt {
        1 => (g, r, b),
        2 => (b, g, r),
        3 => (g, b, r),
        4 => (r, b, g),
        5 => (b, r, g),
        _ => (r, g, b),
    };
    hi << 16 | mid << 8 | lo
}

fn unpack(fmt: u8, c: i64) -> (i64, i64, i64) {
    let hi = (c >> 16) & 0xff;
    let mid = (c >> 8) & 0xff;
    let lo = c & 0xff;
    match fmt {
        1 => (mid, hi, lo),
        2 => (lo, mid, hi),
        3 => (lo, hi, mid),
        4 => (hi, lo, mid),
        5 => (mid, lo, hi),
        _ => (hi, mid, lo),
    }
}

fn blend_packed(fmt: u8, a: i64, b: i64, ratio: i64) -> i64 {
    let (ar, ag, ab) = unpack(fmt, a);
    let (br, bg, bb) = unpack(fmt, b);
    let mix = |x: i64, y: i64| (y * ratio + x * (100 - ratio)) / 100;
    pack(fmt, mix(ar, br), mix(ag, bg), mix(ab, bb))
}

fn h2rgb(v1: u32, v2: u32, hue: u32) -> u32 {
    if hue < 60 {
        v1 * 60 + (v2 - v1) * hue
    } else if hue < 180 {
        v2 * 60
    } else if hue < 240 {
        v1 * 60 + (v2 - v1) * (240 - hue)
    } else {
        v1 * 60
    }
}

// Integer HSL-style conversion, algorithm from
// http://www.easyrgb.com/index.php?X=MATH&H=19#text19
fn make_color(fmt: u8, h: i64, s: i64, l: i64) -> i64 {
    let mut hue = h as u32;
    let mut sat = s as u32;
    let mut light = l as u32;
    if hue > 359 {
        hue %= 360;
    }
    if sat > 100 {
        sat = 100;
    }
    if light > 100 {
        light = 100;
    }

    let (red, green, blue);
    if sat == 0 {
        red = light * 255 / 100;
        green = red;
        blue = red;
    } else {
        let var2 = if light < 50 {
            light * (100 + sat)
        } else {
            (light + sat) * 100 - sat * light
        };
        let var1 = light * 200 - var2;
        let rhue = if hue < 240 { hue + 120 } else { hue - 240 };
        let bhue = if hue >= 120 { hue - 120 } else { hue + 240 };
        red = h2rgb(var1, var2, rhue) * 255 / 600000;
        green = h2rgb(var1, var2, hue) * 255 / 600000;
        blue = h2rgb(var1, var2, bhue) * 255 / 600000;
    }
    pack(fmt, red as i64, green as i64, blue as i64)
}

/// `rgbformat ( n — )`: select the packed channel order.
fn op_rgbformat(interp: &mut Interp) {
    let fmt = interp.pop_int();
    interp.set_rgb_format(fmt as u8);
}

/// `rgb> ( r g b — c )`: pack three channels.
fn op_rgb_to_color(interp: &mut Interp) {
    let b = interp.pop_int();
    let g = interp.pop_int();
    let r = interp.pop_int();
    let c = pack(interp.rgb_format(), r, g, b);
    interp.push_new(Value::int(c));
}

/// `>rgb ( c — r g b )`: unpack into three channels.
fn op_color_to_rgb(interp: &mut Interp) {
    let c = interp.pop_int();
    let (r, g, b) = unpack(interp.rgb_format(), c);
    interp.push_new(Value::int(r));
    interp.push_new(Value::int(g));
    interp.push_new(Value::int(b));
}

/// `hsv> ( h s v — c )`: convert hue 0..359, saturation and value
/// 0..100 into a packed color. Broadcasts over arrays.
fn op_hsv(interp: &mut Interp) {
    let fmt = interp.rgb_format();
    ternary(interp, move |h, s, v| make_color(fmt, h, s, v), None);
}

/// `blend ( a b ratio — c )`: mix two packed colors; ratio 100 is all
/// `b`.
fn op_blend(interp: &mut Interp) {
    let ratio = interp.pop_int();
    let b = interp.pop_int();
    let a = interp.pop_int();
    let c = blend_packed(interp.rgb_format(), a, b, ratio);
    interp.push_new(Value::int(c));
}

/// `ablend ( arr arr ratio — arr )`: blend two equal-length frames in
/// place. Mismatched operands are consumed with no result.
fn op_ablend(interp: &mut Interp) {
    let ratio = interp.pop_int();
    let vb = interp.pop();
    let va = interp.pop();
    match (va, vb) {
        (Some(Value::Array(mut ia)), Some(Value::Array(ib))) if ia.len() == ib.len() => {
            let fmt = interp.rgb_format();
            for (a, &b) in ia.iter_mut().zip(ib.iter()) {
                *a = blend_packed(fmt, *a as i64, b as i64, ratio) as i32;
            }
            interp.push(Value::Array(ia));
            interp.free_value(Value::Array(ib));
        }
        (va, vb) => {
            if let Some(v) = va {
                interp.free_value(v);
            }
            if let Some(v) = vb {
                interp.free_value(v);
            }
        }
    }
}
