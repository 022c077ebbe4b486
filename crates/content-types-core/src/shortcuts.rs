//! Named constants for the most common extensions.
//!
//! Every constant is read out of [`EXTENSION_TO_CONTENT_TYPE`](crate::table::EXTENSION_TO_CONTENT_TYPE)
//! at compile time, so a shortcut can never disagree with the table.

use crate::table::content_type_of;

macro_rules! shortcuts {
    ($($name:ident => $extension:literal),+ $(,)?) => {
        $(
            #[doc = concat!("Content type for `.", $extension, "` files")]
            pub const $name: &str = content_type_of($extension);
        )+

        /// Every shortcut as `(extension, content type)`, in declaration order
        pub const ALL: &[(&str, &str)] = &[$(($extension, $name)),+];
    };
}

shortcuts! {
    // Images
    JPG => "jpg",
    JPEG => "jpeg",
    PNG => "png",
    GIF => "gif",
    WEBP => "webp",
    AVIF => "avif",
    HEIC => "heic",
    SVG => "svg",
    ICO => "ico",
    BMP => "bmp",
    TIFF => "tiff",
    PSD => "psd",
    CR2 => "cr2",
    NEF => "nef",
    DNG => "dng",

    // Audio
    MP3 => "mp3",
    WAV => "wav",
    FLAC => "flac",
    AAC => "aac",
    OGG => "ogg",
    OPUS => "opus",
    M4A => "m4a",
    MIDI => "midi",

    // Video
    MP4 => "mp4",
    MKV => "mkv",
    WEBM => "webm",
    MOV => "mov",
    AVI => "avi",
    M3U8 => "m3u8",

    // Documents and text
    PDF => "pdf",
    DOC => "doc",
    DOCX => "docx",
    XLS => "xls",
    XLSX => "xlsx",
    PPT => "ppt",
    PPTX => "pptx",
    ODT => "odt",
    RTF => "rtf",
    EPUB => "epub",
    TXT => "txt",
    MD => "md",
    HTML => "html",
    CSS => "css",

    // Data
    JSON => "json",
    JSONL => "jsonl",
    XML => "xml",
    CSV => "csv",
    TSV => "tsv",
    YAML => "yaml",
    YML => "yml",
    TOML => "toml",
    PARQUET => "parquet",
    AVRO => "avro",
    ARROW => "arrow",
    IPYNB => "ipynb",
    PKL => "pkl",
    NPY => "npy",
    H5 => "h5",
    SQLITE => "sqlite",
    SQL => "sql",

    // Archives
    ZIP => "zip",
    TAR => "tar",
    GZ => "gz",
    TGZ => "tgz",
    BZ2 => "bz2",
    XZ => "xz",
    ZST => "zst",
    SEVEN_Z => "7z",
    RAR => "rar",

    // Fonts
    TTF => "ttf",
    OTF => "otf",
    WOFF => "woff",
    WOFF2 => "woff2",

    // Programming languages
    JS => "js",
    MJS => "mjs",
    TS => "ts",
    TSX => "tsx",
    PY => "py",
    RS => "rs",
    GO => "go",
    C => "c",
    CPP => "cpp",
    JAVA => "java",
    RB => "rb",
    PHP => "php",
    SH => "sh",
    WASM => "wasm",
    SOL => "sol",
}
