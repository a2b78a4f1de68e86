//! Discretized single periods of the four waveform families.
//!
//! Each table spans the full 8-bit range `[0, 255]`. The square table has one
//! extra low sample, so its period is 101 samples rather than 100.

/// One period of a sine wave, starting at mid-scale and rising.
pub const SINE: [u8; 100] = [
    128, 136, 144, 152, 160, 167, 175, 182, 189, 196, 203, 209,
    215, 221, 226, 231, 236, 240, 243, 247, 249, 251, 253, 254,
    255, 255, 255, 254, 252, 250, 248, 245, 242, 238, 234, 229,
    224, 218, 213, 206, 200, 193, 186, 179, 171, 163, 156, 148,
    140, 132, 123, 115, 107,  99,  92,  84,  76,  69,  62,  55,
     49,  42,  37,  31,  26,  21,  17,  13,  10,   7,   5,   3,
      1,   0,   0,   0,   1,   2,   4,   6,   8,  12,  15,  19,
     24,  29,  34,  40,  46,  52,  59,  66,  73,  80,  88,  95,
    103, 111, 119, 127,
];

/// Symmetric triangle, rising from 0 to 255 and back.
pub const TRIANGLE: [u8; 100] = [
      0,   5,  10,  15,  20,  26,  31,  36,  41,  46,  51,  56,
     61,  66,  71,  76,  82,  87,  92,  97, 102, 107, 112, 117,
    122, 127, 133, 138, 143, 148, 153, 158, 163, 168, 173, 178,
    184, 189, 194, 199, 204, 209, 214, 219, 224, 229, 235, 240,
    245, 250, 255, 250, 245, 240, 235, 229, 224, 219, 214, 209,
    204, 199, 194, 189, 184, 178, 173, 168, 163, 158, 153, 148,
    143, 138, 133, 127, 122, 117, 112, 107, 102,  97,  92,  87,
     82,  77,  71,  66,  61,  56,  51,  46,  41,  36,  31,  25,
     20,  15,  10,   5,
];

/// Rising ramp, starting at mid-scale and wrapping to 0 halfway through.
pub const SAWTOOTH: [u8; 100] = [
    129, 131, 134, 137, 139, 142, 144, 147, 149, 152, 155, 157,
    160, 162, 165, 167, 170, 173, 175, 178, 180, 183, 185, 188,
    191, 193, 196, 198, 201, 203, 206, 209, 211, 214, 216, 219,
    222, 224, 227, 229, 232, 234, 237, 240, 242, 245, 247, 250,
    252, 255,   0,   3,   5,   8,  10,  13,  15,  18,  21,  23,
     26,  28,  31,  33,  36,  39,  41,  44,  46,  49,  52,  54,
     57,  59,  62,  64,  67,  70,  72,  75,  77,  80,  82,  85,
     88,  90,  93,  95,  98, 100, 103, 106, 108, 111, 113, 116,
    118, 121, 124, 126,
];

/// 51 high samples followed by 50 low samples.
pub const SQUARE: [u8; 101] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,
];
