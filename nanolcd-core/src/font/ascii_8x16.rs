//! 8x16 ASCII glyph table
//!
//! Covers the printable range `0x20..=0x7E`, indexed by `code - 0x20`.
//! Each byte is one row, top to bottom, with bit 0 as the leftmost column.

/// Glyph rows for the printable ASCII range
#[rustfmt::skip]
pub static FONT_8X16: [[u8; 16]; 95] = [
    // 0x20 ' '
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 0x21 '!'
    [0x00, 0x00, 0x18, 0x3C, 0x3C, 0x3C, 0x18, 0x18,
     0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00],
    // 0x22 '"'
    [0x00, 0x66, 0x66, 0x66, 0x24, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 0x23 '#'
    [0x00, 0x00, 0x00, 0x36, 0x36, 0x7F, 0x36, 0x36,
     0x36, 0x7F, 0x36, 0x36, 0x00, 0x00, 0x00, 0x00],
    // 0x24 '$'
    [0x18, 0x18, 0x3E, 0x63, 0x43, 0x03, 0x3E, 0x60,
     0x60, 0x61, 0x63, 0x3E, 0x18, 0x18, 0x00, 0x00],
    // 0x25 '%'
    [0x00, 0x00, 0x00, 0x00, 0x43, 0x63, 0x30, 0x18,
     0x0C, 0x06, 0x63, 0x61, 0x00, 0x00, 0x00, 0x00],
    // 0x26 '&'
    [0x00, 0x00, 0x1C, 0x36, 0x36, 0x1C, 0x6E, 0x3B,
     0x33, 0x33, 0x33, 0x6E, 0x00, 0x00, 0x00, 0x00],
    // 0x27 '''
    [0x00, 0x0C, 0x0C, 0x0C, 0x06, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 0x28 '('
    [0x00, 0x00, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x0C,
     0x0C, 0x0C, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00],
    // 0x29 ')'
    [0x00, 0x00, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x30,
     0x30, 0x30, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00],
    // 0x2a '*'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x3C, 0xFF,
     0x3C, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 0x2b '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x7E,
     0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 0x2c ','
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x18, 0x18, 0x18, 0x0C, 0x00, 0x00, 0x00],
    // 0x2d '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 0x2e '.'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00],
    // 0x2f '/'
    [0x00, 0x00, 0x00, 0x00, 0x40, 0x60, 0x30, 0x18,
     0x0C, 0x06, 0x03, 0x01, 0x00, 0x00, 0x00, 0x00],
    // 0x30 '0'
    [0x00, 0x00, 0x1C, 0x36, 0x63, 0x63, 0x6B, 0x6B,
     0x63, 0x63, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00],
    // 0x31 '1'
    [0x00, 0x00, 0x18, 0x1C, 0x1E, 0x18, 0x18, 0x18,
     0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, 0x00, 0x00],
    // 0x32 '2'
    [0x00, 0x00, 0x3E, 0x63, 0x60, 0x30, 0x18, 0x0C,
     0x06, 0x03, 0x63, 0x7F, 0x00, 0x00, 0x00, 0x00],
    // 0x33 '3'
    [0x00, 0x00, 0x3E, 0x63, 0x60, 0x60, 0x3C, 0x60,
     0x60, 0x60, 0x63, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x34 '4'
    [0x00, 0x00, 0x30, 0x38, 0x3C, 0x36, 0x33, 0x7F,
     0x30, 0x30, 0x30, 0x78, 0x00, 0x00, 0x00, 0x00],
    // 0x35 '5'
    [0x00, 0x00, 0x7F, 0x03, 0x03, 0x03, 0x3F, 0x60,
     0x60, 0x60, 0x63, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x36 '6'
    [0x00, 0x00, 0x1C, 0x06, 0x03, 0x03, 0x3F, 0x63,
     0x63, 0x63, 0x63, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x37 '7'
    [0x00, 0x00, 0x7F, 0x63, 0x60, 0x60, 0x30, 0x18,
     0x0C, 0x0C, 0x0C, 0x0C, 0x00, 0x00, 0x00, 0x00],
    // 0x38 '8'
    [0x00, 0x00, 0x3E, 0x63, 0x63, 0x63, 0x3E, 0x63,
     0x63, 0x63, 0x63, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x39 '9'
    [0x00, 0x00, 0x3E, 0x63, 0x63, 0x63, 0x7E, 0x60,
     0x60, 0x60, 0x30, 0x1E, 0x00, 0x00, 0x00, 0x00],
    // 0x3a ':'
    [0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
     0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 0x3b ';'
    [0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
     0x00, 0x18, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00],
    // 0x3c '<'
    [0x00, 0x00, 0x00, 0x60, 0x30, 0x18, 0x0C, 0x06,
     0x0C, 0x18, 0x30, 0x60, 0x00, 0x00, 0x00, 0x00],
    // 0x3d '='
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00,
     0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 0x3e '>'
    [0x00, 0x00, 0x00, 0x06, 0x0C, 0x18, 0x30, 0x60,
     0x30, 0x18, 0x0C, 0x06, 0x00, 0x00, 0x00, 0x00],
    // 0x3f '?'
    [0x00, 0x00, 0x3E, 0x63, 0x63, 0x30, 0x18, 0x18,
     0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00],
    // 0x40 '@'
    [0x00, 0x00, 0x00, 0x3E, 0x63, 0x63, 0x7B, 0x7B,
     0x7B, 0x3B, 0x03, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x41 'A'
    [0x00, 0x00, 0x08, 0x1C, 0x36, 0x63, 0x63, 0x7F,
     0x63, 0x63, 0x63, 0x63, 0x00, 0x00, 0x00, 0x00],
    // 0x42 'B'
    [0x00, 0x00, 0x3F, 0x66, 0x66, 0x66, 0x3E, 0x66,
     0x66, 0x66, 0x66, 0x3F, 0x00, 0x00, 0x00, 0x00],
    // 0x43 'C'
    [0x00, 0x00, 0x3C, 0x66, 0x43, 0x03, 0x03, 0x03,
     0x03, 0x43, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00],
    // 0x44 'D'
    [0x00, 0x00, 0x1F, 0x36, 0x66, 0x66, 0x66, 0x66,
     0x66, 0x66, 0x36, 0x1F, 0x00, 0x00, 0x00, 0x00],
    // 0x45 'E'
    [0x00, 0x00, 0x7F, 0x66, 0x46, 0x16, 0x1E, 0x16,
     0x06, 0x46, 0x66, 0x7F, 0x00, 0x00, 0x00, 0x00],
    // 0x46 'F'
    [0x00, 0x00, 0x7F, 0x66, 0x46, 0x16, 0x1E, 0x16,
     0x06, 0x06, 0x06, 0x0F, 0x00, 0x00, 0x00, 0x00],
    // 0x47 'G'
    [0x00, 0x00, 0x3C, 0x66, 0x43, 0x03, 0x03, 0x7B,
     0x63, 0x63, 0x66, 0x5C, 0x00, 0x00, 0x00, 0x00],
    // 0x48 'H'
    [0x00, 0x00, 0x63, 0x63, 0x63, 0x63, 0x7F, 0x63,
     0x63, 0x63, 0x63, 0x63, 0x00, 0x00, 0x00, 0x00],
    // 0x49 'I'
    [0x00, 0x00, 0x3C, 0x18, 0x18, 0x18, 0x18, 0x18,
     0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00],
    // 0x4a 'J'
    [0x00, 0x00, 0x78, 0x30, 0x30, 0x30, 0x30, 0x30,
     0x33, 0x33, 0x33, 0x1E, 0x00, 0x00, 0x00, 0x00],
    // 0x4b 'K'
    [0x00, 0x00, 0x67, 0x66, 0x66, 0x36, 0x1E, 0x1E,
     0x36, 0x66, 0x66, 0x67, 0x00, 0x00, 0x00, 0x00],
    // 0x4c 'L'
    [0x00, 0x00, 0x0F, 0x06, 0x06, 0x06, 0x06, 0x06,
     0x06, 0x46, 0x66, 0x7F, 0x00, 0x00, 0x00, 0x00],
    // 0x4d 'M'
    [0x00, 0x00, 0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63,
     0x63, 0x63, 0x63, 0x63, 0x00, 0x00, 0x00, 0x00],
    // 0x4e 'N'
    [0x00, 0x00, 0x63, 0x67, 0x6F, 0x7F, 0x7B, 0x73,
     0x63, 0x63, 0x63, 0x63, 0x00, 0x00, 0x00, 0x00],
    // 0x4f 'O'
    [0x00, 0x00, 0x3E, 0x63, 0x63, 0x63, 0x63, 0x63,
     0x63, 0x63, 0x63, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x50 'P'
    [0x00, 0x00, 0x3F, 0x66, 0x66, 0x66, 0x3E, 0x06,
     0x06, 0x06, 0x06, 0x0F, 0x00, 0x00, 0x00, 0x00],
    // 0x51 'Q'
    [0x00, 0x00, 0x3E, 0x63, 0x63, 0x63, 0x63, 0x63,
     0x63, 0x6B, 0x7B, 0x3E, 0x30, 0x70, 0x00, 0x00],
    // 0x52 'R'
    [0x00, 0x00, 0x3F, 0x66, 0x66, 0x66, 0x3E, 0x36,
     0x66, 0x66, 0x66, 0x67, 0x00, 0x00, 0x00, 0x00],
    // 0x53 'S'
    [0x00, 0x00, 0x3E, 0x63, 0x63, 0x06, 0x1C, 0x30,
     0x60, 0x63, 0x63, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x54 'T'
    [0x00, 0x00, 0x7E, 0x7E, 0x5A, 0x18, 0x18, 0x18,
     0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00],
    // 0x55 'U'
    [0x00, 0x00, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63,
     0x63, 0x63, 0x63, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x56 'V'
    [0x00, 0x00, 0x63, 0x63, 0x63, 0x63, 0x63, 0x63,
     0x63, 0x36, 0x1C, 0x08, 0x00, 0x00, 0x00, 0x00],
    // 0x57 'W'
    [0x00, 0x00, 0x63, 0x63, 0x63, 0x63, 0x6B, 0x6B,
     0x6B, 0x7F, 0x77, 0x36, 0x00, 0x00, 0x00, 0x00],
    // 0x58 'X'
    [0x00, 0x00, 0x63, 0x63, 0x36, 0x3E, 0x1C, 0x1C,
     0x3E, 0x36, 0x63, 0x63, 0x00, 0x00, 0x00, 0x00],
    // 0x59 'Y'
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18,
     0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00],
    // 0x5a 'Z'
    [0x00, 0x00, 0x7F, 0x63, 0x61, 0x30, 0x18, 0x0C,
     0x06, 0x43, 0x63, 0x7F, 0x00, 0x00, 0x00, 0x00],
    // 0x5b '['
    [0x00, 0x00, 0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C,
     0x0C, 0x0C, 0x0C, 0x3C, 0x00, 0x00, 0x00, 0x00],
    // 0x5c '\'
    [0x00, 0x00, 0x00, 0x01, 0x03, 0x06, 0x0C, 0x18,
     0x30, 0x60, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 0x5d ']'
    [0x00, 0x00, 0x3C, 0x30, 0x30, 0x30, 0x30, 0x30,
     0x30, 0x30, 0x30, 0x3C, 0x00, 0x00, 0x00, 0x00],
    // 0x5e '^'
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 0x5f '_'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00],
    // 0x60 '`'
    [0x00, 0x0C, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 0x61 'a'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x1E, 0x30, 0x3E,
     0x33, 0x33, 0x33, 0x6E, 0x00, 0x00, 0x00, 0x00],
    // 0x62 'b'
    [0x00, 0x00, 0x07, 0x06, 0x06, 0x1E, 0x36, 0x66,
     0x66, 0x66, 0x66, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x63 'c'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x63, 0x03,
     0x03, 0x03, 0x63, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x64 'd'
    [0x00, 0x00, 0x38, 0x30, 0x30, 0x3C, 0x36, 0x33,
     0x33, 0x33, 0x33, 0x6E, 0x00, 0x00, 0x00, 0x00],
    // 0x65 'e'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x63, 0x7F,
     0x03, 0x03, 0x63, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x66 'f'
    [0x00, 0x00, 0x38, 0x6C, 0x4C, 0x0C, 0x1E, 0x0C,
     0x0C, 0x0C, 0x0C, 0x1E, 0x00, 0x00, 0x00, 0x00],
    // 0x67 'g'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x6E, 0x33, 0x33,
     0x33, 0x33, 0x33, 0x3E, 0x30, 0x33, 0x1E, 0x00],
    // 0x68 'h'
    [0x00, 0x00, 0x07, 0x06, 0x06, 0x36, 0x6E, 0x66,
     0x66, 0x66, 0x66, 0x67, 0x00, 0x00, 0x00, 0x00],
    // 0x69 'i'
    [0x00, 0x00, 0x18, 0x18, 0x00, 0x1C, 0x18, 0x18,
     0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00],
    // 0x6a 'j'
    [0x00, 0x00, 0x60, 0x60, 0x00, 0x70, 0x60, 0x60,
     0x60, 0x60, 0x60, 0x60, 0x66, 0x66, 0x3C, 0x00],
    // 0x6b 'k'
    [0x00, 0x00, 0x07, 0x06, 0x06, 0x66, 0x36, 0x1E,
     0x1E, 0x36, 0x66, 0x67, 0x00, 0x00, 0x00, 0x00],
    // 0x6c 'l'
    [0x00, 0x00, 0x1C, 0x18, 0x18, 0x18, 0x18, 0x18,
     0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00],
    // 0x6d 'm'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x37, 0x7F, 0x6B,
     0x6B, 0x6B, 0x6B, 0x63, 0x00, 0x00, 0x00, 0x00],
    // 0x6e 'n'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3B, 0x66, 0x66,
     0x66, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00],
    // 0x6f 'o'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x63, 0x63,
     0x63, 0x63, 0x63, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x70 'p'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3B, 0x66, 0x66,
     0x66, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00],
    // 0x71 'q'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x6E, 0x33, 0x33,
     0x33, 0x33, 0x33, 0x3E, 0x30, 0x30, 0x78, 0x00],
    // 0x72 'r'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3B, 0x6E, 0x66,
     0x06, 0x06, 0x06, 0x0F, 0x00, 0x00, 0x00, 0x00],
    // 0x73 's'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x63, 0x06,
     0x1C, 0x30, 0x63, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // 0x74 't'
    [0x00, 0x00, 0x08, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C,
     0x0C, 0x0C, 0x6C, 0x38, 0x00, 0x00, 0x00, 0x00],
    // 0x75 'u'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x33, 0x33, 0x33,
     0x33, 0x33, 0x33, 0x6E, 0x00, 0x00, 0x00, 0x00],
    // 0x76 'v'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x66,
     0x66, 0x66, 0x3C, 0x18, 0x00, 0x00, 0x00, 0x00],
    // 0x77 'w'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x63, 0x63, 0x6B,
     0x6B, 0x6B, 0x7F, 0x36, 0x00, 0x00, 0x00, 0x00],
    // 0x78 'x'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x63, 0x36, 0x1C,
     0x1C, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00],
    // 0x79 'y'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x63, 0x63, 0x63,
     0x63, 0x63, 0x63, 0x7E, 0x60, 0x30, 0x1F, 0x00],
    // 0x7a 'z'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x33, 0x18,
     0x0C, 0x06, 0x63, 0x7F, 0x00, 0x00, 0x00, 0x00],
    // 0x7b '{'
    [0x00, 0x00, 0x70, 0x18, 0x18, 0x18, 0x0E, 0x18,
     0x18, 0x18, 0x18, 0x70, 0x00, 0x00, 0x00, 0x00],
    // 0x7c '|'
    [0x00, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18,
     0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00],
    // 0x7d '}'
    [0x00, 0x00, 0x0E, 0x18, 0x18, 0x18, 0x70, 0x18,
     0x18, 0x18, 0x18, 0x0E, 0x00, 0x00, 0x00, 0x00],
    // 0x7e '~'
    [0x00, 0x00, 0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00,
     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
];
