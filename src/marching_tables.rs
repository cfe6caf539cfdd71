//! Case tables for marching cubes and marching squares.
//!
//! These are the classic enumerations of how the isosurface can cut a cube or
//! square given the inside/outside classification of its corners. Corner `i`
//! contributes bit `i` to the case index when its sample is below the
//! isovalue.

/// Unit offsets of the 8 cube corners, in case-index bit order.
pub const MC_CORNERS: [[i32; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Corner pairs joined by each of the 12 cube edges.
pub const MC_EDGE_CORNERS: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Bit `e` is set when cube edge `e` is crossed by the isosurface for a given
/// corner sign mask.
pub const MC_EDGES: [u16; 256] = [
    0x0000, 0x0109, 0x0203, 0x030a, 0x0406, 0x050f, 0x0605, 0x070c,
    0x080c, 0x0905, 0x0a0f, 0x0b06, 0x0c0a, 0x0d03, 0x0e09, 0x0f00,
    0x0190, 0x0099, 0x0393, 0x029a, 0x0596, 0x049f, 0x0795, 0x069c,
    0x099c, 0x0895, 0x0b9f, 0x0a96, 0x0d9a, 0x0c93, 0x0f99, 0x0e90,
    0x0230, 0x0339, 0x0033, 0x013a, 0x0636, 0x073f, 0x0435, 0x053c,
    0x0a3c, 0x0b35, 0x083f, 0x0936, 0x0e3a, 0x0f33, 0x0c39, 0x0d30,
    0x03a0, 0x02a9, 0x01a3, 0x00aa, 0x07a6, 0x06af, 0x05a5, 0x04ac,
    0x0bac, 0x0aa5, 0x09af, 0x08a6, 0x0faa, 0x0ea3, 0x0da9, 0x0ca0,
    0x0460, 0x0569, 0x0663, 0x076a, 0x0066, 0x016f, 0x0265, 0x036c,
    0x0c6c, 0x0d65, 0x0e6f, 0x0f66, 0x086a, 0x0963, 0x0a69, 0x0b60,
    0x05f0, 0x04f9, 0x07f3, 0x06fa, 0x01f6, 0x00ff, 0x03f5, 0x02fc,
    0x0dfc, 0x0cf5, 0x0fff, 0x0ef6, 0x09fa, 0x08f3, 0x0bf9, 0x0af0,
    0x0650, 0x0759, 0x0453, 0x055a, 0x0256, 0x035f, 0x0055, 0x015c,
    0x0e5c, 0x0f55, 0x0c5f, 0x0d56, 0x0a5a, 0x0b53, 0x0859, 0x0950,
    0x07c0, 0x06c9, 0x05c3, 0x04ca, 0x03c6, 0x02cf, 0x01c5, 0x00cc,
    0x0fcc, 0x0ec5, 0x0dcf, 0x0cc6, 0x0bca, 0x0ac3, 0x09c9, 0x08c0,
    0x08c0, 0x09c9, 0x0ac3, 0x0bca, 0x0cc6, 0x0dcf, 0x0ec5, 0x0fcc,
    0x00cc, 0x01c5, 0x02cf, 0x03c6, 0x04ca, 0x05c3, 0x06c9, 0x07c0,
    0x0950, 0x0859, 0x0b53, 0x0a5a, 0x0d56, 0x0c5f, 0x0f55, 0x0e5c,
    0x015c, 0x0055, 0x035f, 0x0256, 0x055a, 0x0453, 0x0759, 0x0650,
    0x0af0, 0x0bf9, 0x08f3, 0x09fa, 0x0ef6, 0x0fff, 0x0cf5, 0x0dfc,
    0x02fc, 0x03f5, 0x00ff, 0x01f6, 0x06fa, 0x07f3, 0x04f9, 0x05f0,
    0x0b60, 0x0a69, 0x0963, 0x086a, 0x0f66, 0x0e6f, 0x0d65, 0x0c6c,
    0x036c, 0x0265, 0x016f, 0x0066, 0x076a, 0x0663, 0x0569, 0x0460,
    0x0ca0, 0x0da9, 0x0ea3, 0x0faa, 0x08a6, 0x09af, 0x0aa5, 0x0bac,
    0x04ac, 0x05a5, 0x06af, 0x07a6, 0x00aa, 0x01a3, 0x02a9, 0x03a0,
    0x0d30, 0x0c39, 0x0f33, 0x0e3a, 0x0936, 0x083f, 0x0b35, 0x0a3c,
    0x053c, 0x0435, 0x073f, 0x0636, 0x013a, 0x0033, 0x0339, 0x0230,
    0x0e90, 0x0f99, 0x0c93, 0x0d9a, 0x0a96, 0x0b9f, 0x0895, 0x099c,
    0x069c, 0x0795, 0x049f, 0x0596, 0x029a, 0x0393, 0x0099, 0x0190,
    0x0f00, 0x0e09, 0x0d03, 0x0c0a, 0x0b06, 0x0a0f, 0x0905, 0x080c,
    0x070c, 0x0605, 0x050f, 0x0406, 0x030a, 0x0203, 0x0109, 0x0000,
];

/// Edge triples forming the triangles for each corner sign mask.
pub const MC_TRIANGLES: [&[u8]; 256] = [
    &[], // 0
    &[0, 8, 3], // 1
    &[0, 1, 9], // 2
    &[1, 8, 3, 9, 8, 1], // 3
    &[1, 2, 10], // 4
    &[0, 8, 3, 1, 2, 10], // 5
    &[9, 2, 10, 0, 2, 9], // 6
    &[2, 8, 3, 2, 10, 8, 10, 9, 8], // 7
    &[3, 11, 2], // 8
    &[0, 11, 2, 8, 11, 0], // 9
    &[1, 9, 0, 2, 3, 11], // 10
    &[1, 11, 2, 1, 9, 11, 9, 8, 11], // 11
    &[3, 10, 1, 11, 10, 3], // 12
    &[0, 10, 1, 0, 8, 10, 8, 11, 10], // 13
    &[3, 9, 0, 3, 11, 9, 11, 10, 9], // 14
    &[9, 8, 10, 10, 8, 11], // 15
    &[4, 7, 8], // 16
    &[4, 3, 0, 7, 3, 4], // 17
    &[0, 1, 9, 8, 4, 7], // 18
    &[4, 1, 9, 4, 7, 1, 7, 3, 1], // 19
    &[1, 2, 10, 8, 4, 7], // 20
    &[3, 4, 7, 3, 0, 4, 1, 2, 10], // 21
    &[9, 2, 10, 9, 0, 2, 8, 4, 7], // 22
    &[2, 10, 9, 2, 9, 7, 2, 7, 3, 7, 9, 4], // 23
    &[8, 4, 7, 3, 11, 2], // 24
    &[11, 4, 7, 11, 2, 4, 2, 0, 4], // 25
    &[9, 0, 1, 8, 4, 7, 2, 3, 11], // 26
    &[4, 7, 11, 9, 4, 11, 9, 11, 2, 9, 2, 1], // 27
    &[3, 10, 1, 3, 11, 10, 7, 8, 4], // 28
    &[1, 11, 10, 1, 4, 11, 1, 0, 4, 7, 11, 4], // 29
    &[4, 7, 8, 9, 0, 11, 9, 11, 10, 11, 0, 3], // 30
    &[4, 7, 11, 4, 11, 9, 9, 11, 10], // 31
    &[9, 5, 4], // 32
    &[9, 5, 4, 0, 8, 3], // 33
    &[0, 5, 4, 1, 5, 0], // 34
    &[8, 5, 4, 8, 3, 5, 3, 1, 5], // 35
    &[1, 2, 10, 9, 5, 4], // 36
    &[3, 0, 8, 1, 2, 10, 4, 9, 5], // 37
    &[5, 2, 10, 5, 4, 2, 4, 0, 2], // 38
    &[2, 10, 5, 3, 2, 5, 3, 5, 4, 3, 4, 8], // 39
    &[9, 5, 4, 2, 3, 11], // 40
    &[0, 11, 2, 0, 8, 11, 4, 9, 5], // 41
    &[0, 5, 4, 0, 1, 5, 2, 3, 11], // 42
    &[2, 1, 5, 2, 5, 8, 2, 8, 11, 4, 8, 5], // 43
    &[10, 3, 11, 10, 1, 3, 9, 5, 4], // 44
    &[4, 9, 5, 0, 8, 1, 8, 10, 1, 8, 11, 10], // 45
    &[5, 4, 0, 5, 0, 11, 5, 11, 10, 11, 0, 3], // 46
    &[5, 4, 8, 5, 8, 10, 10, 8, 11], // 47
    &[9, 7, 8, 5, 7, 9], // 48
    &[9, 3, 0, 9, 5, 3, 5, 7, 3], // 49
    &[0, 7, 8, 0, 1, 7, 1, 5, 7], // 50
    &[1, 5, 3, 3, 5, 7], // 51
    &[9, 7, 8, 9, 5, 7, 10, 1, 2], // 52
    &[10, 1, 2, 9, 5, 0, 5, 3, 0, 5, 7, 3], // 53
    &[8, 0, 2, 8, 2, 5, 8, 5, 7, 10, 5, 2], // 54
    &[2, 10, 5, 2, 5, 3, 3, 5, 7], // 55
    &[7, 9, 5, 7, 8, 9, 3, 11, 2], // 56
    &[9, 5, 7, 9, 7, 2, 9, 2, 0, 2, 7, 11], // 57
    &[2, 3, 11, 0, 1, 8, 1, 7, 8, 1, 5, 7], // 58
    &[11, 2, 1, 11, 1, 7, 7, 1, 5], // 59
    &[9, 5, 8, 8, 5, 7, 10, 1, 3, 10, 3, 11], // 60
    &[5, 7, 0, 5, 0, 9, 7, 11, 0, 1, 0, 10, 11, 10, 0], // 61
    &[11, 10, 0, 11, 0, 3, 10, 5, 0, 8, 0, 7, 5, 7, 0], // 62
    &[11, 10, 5, 7, 11, 5], // 63
    &[10, 6, 5], // 64
    &[0, 8, 3, 5, 10, 6], // 65
    &[9, 0, 1, 5, 10, 6], // 66
    &[1, 8, 3, 1, 9, 8, 5, 10, 6], // 67
    &[1, 6, 5, 2, 6, 1], // 68
    &[1, 6, 5, 1, 2, 6, 3, 0, 8], // 69
    &[9, 6, 5, 9, 0, 6, 0, 2, 6], // 70
    &[5, 9, 8, 5, 8, 2, 5, 2, 6, 3, 2, 8], // 71
    &[2, 3, 11, 10, 6, 5], // 72
    &[11, 0, 8, 11, 2, 0, 10, 6, 5], // 73
    &[0, 1, 9, 2, 3, 11, 5, 10, 6], // 74
    &[5, 10, 6, 1, 9, 2, 9, 11, 2, 9, 8, 11], // 75
    &[6, 3, 11, 6, 5, 3, 5, 1, 3], // 76
    &[0, 8, 11, 0, 11, 5, 0, 5, 1, 5, 11, 6], // 77
    &[3, 11, 6, 0, 3, 6, 0, 6, 5, 0, 5, 9], // 78
    &[6, 5, 9, 6, 9, 11, 11, 9, 8], // 79
    &[5, 10, 6, 4, 7, 8], // 80
    &[4, 3, 0, 4, 7, 3, 6, 5, 10], // 81
    &[1, 9, 0, 5, 10, 6, 8, 4, 7], // 82
    &[10, 6, 5, 1, 9, 7, 1, 7, 3, 7, 9, 4], // 83
    &[6, 1, 2, 6, 5, 1, 4, 7, 8], // 84
    &[1, 2, 5, 5, 2, 6, 3, 0, 4, 3, 4, 7], // 85
    &[8, 4, 7, 9, 0, 5, 0, 6, 5, 0, 2, 6], // 86
    &[7, 3, 9, 7, 9, 4, 3, 2, 9, 5, 9, 6, 2, 6, 9], // 87
    &[3, 11, 2, 7, 8, 4, 10, 6, 5], // 88
    &[5, 10, 6, 4, 7, 2, 4, 2, 0, 2, 7, 11], // 89
    &[0, 1, 9, 4, 7, 8, 2, 3, 11, 5, 10, 6], // 90
    &[9, 2, 1, 9, 11, 2, 9, 4, 11, 7, 11, 4, 5, 10, 6], // 91
    &[8, 4, 7, 3, 11, 5, 3, 5, 1, 5, 11, 6], // 92
    &[5, 1, 11, 5, 11, 6, 1, 0, 11, 7, 11, 4, 0, 4, 11], // 93
    &[0, 5, 9, 0, 6, 5, 0, 3, 6, 11, 6, 3, 8, 4, 7], // 94
    &[6, 5, 9, 6, 9, 11, 4, 7, 9, 7, 11, 9], // 95
    &[10, 4, 9, 6, 4, 10], // 96
    &[4, 10, 6, 4, 9, 10, 0, 8, 3], // 97
    &[10, 0, 1, 10, 6, 0, 6, 4, 0], // 98
    &[8, 3, 1, 8, 1, 6, 8, 6, 4, 6, 1, 10], // 99
    &[1, 4, 9, 1, 2, 4, 2, 6, 4], // 100
    &[3, 0, 8, 1, 2, 9, 2, 4, 9, 2, 6, 4], // 101
    &[0, 2, 4, 4, 2, 6], // 102
    &[8, 3, 2, 8, 2, 4, 4, 2, 6], // 103
    &[10, 4, 9, 10, 6, 4, 11, 2, 3], // 104
    &[0, 8, 2, 2, 8, 11, 4, 9, 10, 4, 10, 6], // 105
    &[3, 11, 2, 0, 1, 6, 0, 6, 4, 6, 1, 10], // 106
    &[6, 4, 1, 6, 1, 10, 4, 8, 1, 2, 1, 11, 8, 11, 1], // 107
    &[9, 6, 4, 9, 3, 6, 9, 1, 3, 11, 6, 3], // 108
    &[8, 11, 1, 8, 1, 0, 11, 6, 1, 9, 1, 4, 6, 4, 1], // 109
    &[3, 11, 6, 3, 6, 0, 0, 6, 4], // 110
    &[6, 4, 8, 11, 6, 8], // 111
    &[7, 10, 6, 7, 8, 10, 8, 9, 10], // 112
    &[0, 7, 3, 0, 10, 7, 0, 9, 10, 6, 7, 10], // 113
    &[10, 6, 7, 1, 10, 7, 1, 7, 8, 1, 8, 0], // 114
    &[10, 6, 7, 10, 7, 1, 1, 7, 3], // 115
    &[1, 2, 6, 1, 6, 8, 1, 8, 9, 8, 6, 7], // 116
    &[2, 6, 9, 2, 9, 1, 6, 7, 9, 0, 9, 3, 7, 3, 9], // 117
    &[7, 8, 0, 7, 0, 6, 6, 0, 2], // 118
    &[7, 3, 2, 6, 7, 2], // 119
    &[2, 3, 11, 10, 6, 8, 10, 8, 9, 8, 6, 7], // 120
    &[2, 0, 7, 2, 7, 11, 0, 9, 7, 6, 7, 10, 9, 10, 7], // 121
    &[1, 8, 0, 1, 7, 8, 1, 10, 7, 6, 7, 10, 2, 3, 11], // 122
    &[11, 2, 1, 11, 1, 7, 10, 6, 1, 6, 7, 1], // 123
    &[8, 9, 6, 8, 6, 7, 9, 1, 6, 11, 6, 3, 1, 3, 6], // 124
    &[0, 9, 1, 11, 6, 7], // 125
    &[7, 8, 0, 7, 0, 6, 3, 11, 0, 11, 6, 0], // 126
    &[7, 11, 6], // 127
    &[7, 6, 11], // 128
    &[3, 0, 8, 11, 7, 6], // 129
    &[0, 1, 9, 11, 7, 6], // 130
    &[8, 1, 9, 8, 3, 1, 11, 7, 6], // 131
    &[10, 1, 2, 6, 11, 7], // 132
    &[1, 2, 10, 3, 0, 8, 6, 11, 7], // 133
    &[2, 9, 0, 2, 10, 9, 6, 11, 7], // 134
    &[6, 11, 7, 2, 10, 3, 10, 8, 3, 10, 9, 8], // 135
    &[7, 2, 3, 6, 2, 7], // 136
    &[7, 0, 8, 7, 6, 0, 6, 2, 0], // 137
    &[2, 7, 6, 2, 3, 7, 0, 1, 9], // 138
    &[1, 6, 2, 1, 8, 6, 1, 9, 8, 8, 7, 6], // 139
    &[10, 7, 6, 10, 1, 7, 1, 3, 7], // 140
    &[10, 7, 6, 1, 7, 10, 1, 8, 7, 1, 0, 8], // 141
    &[0, 3, 7, 0, 7, 10, 0, 10, 9, 6, 10, 7], // 142
    &[7, 6, 10, 7, 10, 8, 8, 10, 9], // 143
    &[6, 8, 4, 11, 8, 6], // 144
    &[3, 6, 11, 3, 0, 6, 0, 4, 6], // 145
    &[8, 6, 11, 8, 4, 6, 9, 0, 1], // 146
    &[9, 4, 6, 9, 6, 3, 9, 3, 1, 11, 3, 6], // 147
    &[6, 8, 4, 6, 11, 8, 2, 10, 1], // 148
    &[1, 2, 10, 3, 0, 11, 0, 6, 11, 0, 4, 6], // 149
    &[4, 11, 8, 4, 6, 11, 0, 2, 9, 2, 10, 9], // 150
    &[10, 9, 3, 10, 3, 2, 9, 4, 3, 11, 3, 6, 4, 6, 3], // 151
    &[8, 2, 3, 8, 4, 2, 4, 6, 2], // 152
    &[0, 4, 2, 4, 6, 2], // 153
    &[1, 9, 0, 2, 3, 4, 2, 4, 6, 4, 3, 8], // 154
    &[1, 9, 4, 1, 4, 2, 2, 4, 6], // 155
    &[8, 1, 3, 8, 6, 1, 8, 4, 6, 6, 10, 1], // 156
    &[10, 1, 0, 10, 0, 6, 6, 0, 4], // 157
    &[4, 6, 3, 4, 3, 8, 6, 10, 3, 0, 3, 9, 10, 9, 3], // 158
    &[10, 9, 4, 6, 10, 4], // 159
    &[4, 9, 5, 7, 6, 11], // 160
    &[0, 8, 3, 4, 9, 5, 11, 7, 6], // 161
    &[5, 0, 1, 5, 4, 0, 7, 6, 11], // 162
    &[11, 7, 6, 8, 3, 4, 3, 5, 4, 3, 1, 5], // 163
    &[9, 5, 4, 10, 1, 2, 7, 6, 11], // 164
    &[6, 11, 7, 1, 2, 10, 0, 8, 3, 4, 9, 5], // 165
    &[7, 6, 11, 5, 4, 10, 4, 2, 10, 4, 0, 2], // 166
    &[3, 4, 8, 3, 5, 4, 3, 2, 5, 10, 5, 2, 11, 7, 6], // 167
    &[7, 2, 3, 7, 6, 2, 5, 4, 9], // 168
    &[9, 5, 4, 0, 8, 6, 0, 6, 2, 6, 8, 7], // 169
    &[3, 6, 2, 3, 7, 6, 1, 5, 0, 5, 4, 0], // 170
    &[6, 2, 8, 6, 8, 7, 2, 1, 8, 4, 8, 5, 1, 5, 8], // 171
    &[9, 5, 4, 10, 1, 6, 1, 7, 6, 1, 3, 7], // 172
    &[1, 6, 10, 1, 7, 6, 1, 0, 7, 8, 7, 0, 9, 5, 4], // 173
    &[4, 0, 10, 4, 10, 5, 0, 3, 10, 6, 10, 7, 3, 7, 10], // 174
    &[7, 6, 10, 7, 10, 8, 5, 4, 10, 4, 8, 10], // 175
    &[6, 9, 5, 6, 11, 9, 11, 8, 9], // 176
    &[3, 6, 11, 0, 6, 3, 0, 5, 6, 0, 9, 5], // 177
    &[0, 11, 8, 0, 5, 11, 0, 1, 5, 5, 6, 11], // 178
    &[6, 11, 3, 6, 3, 5, 5, 3, 1], // 179
    &[1, 2, 10, 9, 5, 11, 9, 11, 8, 11, 5, 6], // 180
    &[0, 11, 3, 0, 6, 11, 0, 9, 6, 5, 6, 9, 1, 2, 10], // 181
    &[11, 8, 5, 11, 5, 6, 8, 0, 5, 10, 5, 2, 0, 2, 5], // 182
    &[6, 11, 3, 6, 3, 5, 2, 10, 3, 10, 5, 3], // 183
    &[5, 8, 9, 5, 2, 8, 5, 6, 2, 3, 8, 2], // 184
    &[9, 5, 6, 9, 6, 0, 0, 6, 2], // 185
    &[1, 5, 8, 1, 8, 0, 5, 6, 8, 3, 8, 2, 6, 2, 8], // 186
    &[1, 5, 6, 2, 1, 6], // 187
    &[1, 3, 6, 1, 6, 10, 3, 8, 6, 5, 6, 9, 8, 9, 6], // 188
    &[10, 1, 0, 10, 0, 6, 9, 5, 0, 5, 6, 0], // 189
    &[0, 3, 8, 5, 6, 10], // 190
    &[10, 5, 6], // 191
    &[11, 5, 10, 7, 5, 11], // 192
    &[11, 5, 10, 11, 7, 5, 8, 3, 0], // 193
    &[5, 11, 7, 5, 10, 11, 1, 9, 0], // 194
    &[10, 7, 5, 10, 11, 7, 9, 8, 1, 8, 3, 1], // 195
    &[11, 1, 2, 11, 7, 1, 7, 5, 1], // 196
    &[0, 8, 3, 1, 2, 7, 1, 7, 5, 7, 2, 11], // 197
    &[9, 7, 5, 9, 2, 7, 9, 0, 2, 2, 11, 7], // 198
    &[7, 5, 2, 7, 2, 11, 5, 9, 2, 3, 2, 8, 9, 8, 2], // 199
    &[2, 5, 10, 2, 3, 5, 3, 7, 5], // 200
    &[8, 2, 0, 8, 5, 2, 8, 7, 5, 10, 2, 5], // 201
    &[9, 0, 1, 5, 10, 3, 5, 3, 7, 3, 10, 2], // 202
    &[9, 8, 2, 9, 2, 1, 8, 7, 2, 10, 2, 5, 7, 5, 2], // 203
    &[1, 3, 5, 3, 7, 5], // 204
    &[0, 8, 7, 0, 7, 1, 1, 7, 5], // 205
    &[9, 0, 3, 9, 3, 5, 5, 3, 7], // 206
    &[9, 8, 7, 5, 9, 7], // 207
    &[5, 8, 4, 5, 10, 8, 10, 11, 8], // 208
    &[5, 0, 4, 5, 11, 0, 5, 10, 11, 11, 3, 0], // 209
    &[0, 1, 9, 8, 4, 10, 8, 10, 11, 10, 4, 5], // 210
    &[10, 11, 4, 10, 4, 5, 11, 3, 4, 9, 4, 1, 3, 1, 4], // 211
    &[2, 5, 1, 2, 8, 5, 2, 11, 8, 4, 5, 8], // 212
    &[0, 4, 11, 0, 11, 3, 4, 5, 11, 2, 11, 1, 5, 1, 11], // 213
    &[0, 2, 5, 0, 5, 9, 2, 11, 5, 4, 5, 8, 11, 8, 5], // 214
    &[9, 4, 5, 2, 11, 3], // 215
    &[2, 5, 10, 3, 5, 2, 3, 4, 5, 3, 8, 4], // 216
    &[5, 10, 2, 5, 2, 4, 4, 2, 0], // 217
    &[3, 10, 2, 3, 5, 10, 3, 8, 5, 4, 5, 8, 0, 1, 9], // 218
    &[5, 10, 2, 5, 2, 4, 1, 9, 2, 9, 4, 2], // 219
    &[8, 4, 5, 8, 5, 3, 3, 5, 1], // 220
    &[0, 4, 5, 1, 0, 5], // 221
    &[8, 4, 5, 8, 5, 3, 9, 0, 5, 0, 3, 5], // 222
    &[9, 4, 5], // 223
    &[4, 11, 7, 4, 9, 11, 9, 10, 11], // 224
    &[0, 8, 3, 4, 9, 7, 9, 11, 7, 9, 10, 11], // 225
    &[1, 10, 11, 1, 11, 4, 1, 4, 0, 7, 4, 11], // 226
    &[3, 1, 4, 3, 4, 8, 1, 10, 4, 7, 4, 11, 10, 11, 4], // 227
    &[4, 11, 7, 9, 11, 4, 9, 2, 11, 9, 1, 2], // 228
    &[9, 7, 4, 9, 11, 7, 9, 1, 11, 2, 11, 1, 0, 8, 3], // 229
    &[11, 7, 4, 11, 4, 2, 2, 4, 0], // 230
    &[11, 7, 4, 11, 4, 2, 8, 3, 4, 3, 2, 4], // 231
    &[2, 9, 10, 2, 7, 9, 2, 3, 7, 7, 4, 9], // 232
    &[9, 10, 7, 9, 7, 4, 10, 2, 7, 8, 7, 0, 2, 0, 7], // 233
    &[3, 7, 10, 3, 10, 2, 7, 4, 10, 1, 10, 0, 4, 0, 10], // 234
    &[1, 10, 2, 8, 7, 4], // 235
    &[4, 9, 1, 4, 1, 7, 7, 1, 3], // 236
    &[4, 9, 1, 4, 1, 7, 0, 8, 1, 8, 7, 1], // 237
    &[4, 0, 3, 7, 4, 3], // 238
    &[4, 8, 7], // 239
    &[9, 10, 8, 10, 11, 8], // 240
    &[3, 0, 9, 3, 9, 11, 11, 9, 10], // 241
    &[0, 1, 10, 0, 10, 8, 8, 10, 11], // 242
    &[3, 1, 10, 11, 3, 10], // 243
    &[1, 2, 11, 1, 11, 9, 9, 11, 8], // 244
    &[3, 0, 9, 3, 9, 11, 1, 2, 9, 2, 11, 9], // 245
    &[0, 2, 11, 8, 0, 11], // 246
    &[3, 2, 11], // 247
    &[2, 3, 8, 2, 8, 10, 10, 8, 9], // 248
    &[9, 10, 2, 0, 9, 2], // 249
    &[2, 3, 8, 2, 8, 10, 0, 1, 8, 1, 10, 8], // 250
    &[1, 10, 2], // 251
    &[1, 3, 8, 9, 1, 8], // 252
    &[0, 9, 1], // 253
    &[0, 3, 8], // 254
    &[], // 255
];

/// Unit offsets of the 4 square corners, in case-index bit order.
pub const MS_CORNERS: [[i32; 2]; 4] = [[0, 0], [1, 0], [1, 1], [0, 1]];

/// Corner pairs joined by each of the 4 square edges.
pub const MS_EDGE_CORNERS: [[usize; 2]; 4] = [[0, 1], [1, 2], [2, 3], [3, 0]];

/// Bit `e` is set when square edge `e` is crossed by the contour.
pub const MS_EDGES: [u8; 16] = [
    0x0, 0x9, 0x3, 0xa, //
    0x6, 0xf, 0x5, 0xc, //
    0xc, 0x5, 0xf, 0x6, //
    0xa, 0x3, 0x9, 0x0,
];

/// Edge pairs forming the line segments for each corner sign mask.
pub const MS_LINES: [&[u8]; 16] = [
    &[],
    &[0, 3],
    &[0, 1],
    &[1, 3],
    &[1, 2],
    &[0, 1, 2, 3],
    &[0, 2],
    &[2, 3],
    &[2, 3],
    &[0, 2],
    &[0, 3, 1, 2],
    &[1, 2],
    &[1, 3],
    &[0, 1],
    &[0, 3],
    &[],
];
