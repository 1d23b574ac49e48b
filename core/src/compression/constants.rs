/// Stable codec IDs (u16) for configuration and the CLI.
pub mod codec_ids {
    pub const AUTO: u16    = 0x0000;
    pub const XZ: u16      = 0x0001;
    pub const ZSTD: u16    = 0x0002;
    pub const DEFLATE: u16 = 0x0003;
}

/// Highest (and default) presets. Share links favour ratio over speed.
pub const MAX_LEVEL_XZ: i32 = 9;
pub const MAX_LEVEL_ZSTD: i32 = 22;
pub const MAX_LEVEL_DEFLATE: i32 = 9;

/// Stream magic used by the auto decompressor.
pub const XZ_MAGIC: [u8; 6] = [0xFD, b'7', b'z', b'X', b'Z', 0x00];
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];
/// zlib CMF byte for deflate with a 32 KiB window.
pub const ZLIB_CMF_DEFLATE_32K: u8 = 0x78;
