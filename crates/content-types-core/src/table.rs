//! The static extension to content type table.
//!
//! Entries are kept sorted by extension so that lookups can binary search the slice directly,
//! the table never needs to be built or initialized at runtime.

/// The content type used for unknown extensions when files are treated as binary
pub const DEFAULT_BINARY_CONTENT_TYPE: &str = "application/octet-stream";

/// The content type used for unknown extensions when files are treated as text
pub const DEFAULT_TEXT_CONTENT_TYPE: &str = "text/plain";

/// Sorted `(extension, content type)` pairs. Keys are lowercase, unique and never contain a dot.
const ENTRIES: &[(&str, &str)] = &[
    ("3fr", "image/x-hasselblad-3fr"),
    ("3g2", "video/3gpp2"),
    ("3gp", "video/3gpp"),
    ("7z", "application/x-7z-compressed"),
    ("a", "application/x-archive"),
    ("aab", "application/octet-stream"),
    ("aac", "audio/aac"),
    ("abw", "application/x-abiword"),
    ("ac3", "audio/ac3"),
    ("accdb", "application/x-msaccess"),
    ("adoc", "text/asciidoc"),
    ("ai", "application/postscript"),
    ("aif", "audio/aiff"),
    ("aifc", "audio/aiff"),
    ("aiff", "audio/aiff"),
    ("amr", "audio/amr"),
    ("ape", "audio/x-ape"),
    ("apk", "application/vnd.android.package-archive"),
    ("apng", "image/apng"),
    ("ar", "application/x-archive"),
    ("arc", "application/x-freearc"),
    ("arrow", "application/vnd.apache.arrow.file"),
    ("arw", "image/x-sony-arw"),
    ("asc", "application/pgp-signature"),
    ("asciidoc", "text/asciidoc"),
    ("asf", "video/x-ms-asf"),
    ("asm", "text/x-asm"),
    ("ass", "text/x-ssa"),
    ("astro", "text/x-astro"),
    ("atom", "application/atom+xml"),
    ("au", "audio/basic"),
    ("avi", "video/x-msvideo"),
    ("avif", "image/avif"),
    ("avro", "application/avro"),
    ("azw", "application/vnd.amazon.ebook"),
    ("azw3", "application/vnd.amazon.ebook"),
    ("babelrc", "application/json"),
    ("bas", "text/plain"),
    ("bash", "application/x-sh"),
    ("bat", "application/x-bat"),
    ("bib", "text/x-bibtex"),
    ("bin", "application/octet-stream"),
    ("blend", "application/x-blender"),
    ("bmp", "image/bmp"),
    ("br", "application/x-brotli"),
    ("bson", "application/bson"),
    ("bz", "application/x-bzip"),
    ("bz2", "application/x-bzip2"),
    ("c", "text/x-c"),
    ("cab", "application/vnd.ms-cab-compressed"),
    ("caf", "audio/x-caf"),
    ("cairo", "text/x-cairo"),
    ("cbor", "application/cbor"),
    ("cc", "text/x-c++"),
    ("cer", "application/pkix-cert"),
    ("cfg", "text/plain"),
    ("cjs", "text/javascript"),
    ("ckpt", "application/octet-stream"),
    ("class", "application/java-vm"),
    ("clj", "text/x-clojure"),
    ("cljs", "text/x-clojure"),
    ("cmake", "text/x-cmake"),
    ("cmd", "application/x-bat"),
    ("coffee", "text/coffeescript"),
    ("conf", "text/plain"),
    ("cpio", "application/x-cpio"),
    ("cpp", "text/x-c++"),
    ("cr", "text/x-crystal"),
    ("cr2", "image/x-canon-cr2"),
    ("cr3", "image/x-canon-cr3"),
    ("crate", "application/gzip"),
    ("crt", "application/x-x509-ca-cert"),
    ("crw", "image/x-canon-crw"),
    ("cs", "text/x-csharp"),
    ("csh", "application/x-csh"),
    ("csr", "application/pkcs10"),
    ("css", "text/css"),
    ("csv", "text/csv"),
    ("cts", "text/typescript"),
    ("cu", "text/x-cuda"),
    ("cur", "image/x-icon"),
    ("cxx", "text/x-c++"),
    ("d", "text/x-d"),
    ("dae", "model/vnd.collada+xml"),
    ("dart", "text/x-dart"),
    ("dat", "application/octet-stream"),
    ("db", "application/vnd.sqlite3"),
    ("dbf", "application/x-dbf"),
    ("dds", "image/vnd.ms-dds"),
    ("deb", "application/vnd.debian.binary-package"),
    ("der", "application/x-x509-ca-cert"),
    ("dib", "image/bmp"),
    ("diff", "text/x-diff"),
    ("djv", "image/vnd.djvu"),
    ("djvu", "image/vnd.djvu"),
    ("dll", "application/vnd.microsoft.portable-executable"),
    ("dmg", "application/x-apple-diskimage"),
    ("dng", "image/x-adobe-dng"),
    ("doc", "application/msword"),
    ("dockerfile", "text/x-dockerfile"),
    ("dockerignore", "text/plain"),
    ("docm", "application/vnd.ms-word.document.macroenabled.12"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ("dot", "application/msword"),
    ("dotx", "application/vnd.openxmlformats-officedocument.wordprocessingml.template"),
    ("dta", "application/x-stata-dta"),
    ("dtd", "application/xml-dtd"),
    ("dts", "audio/vnd.dts"),
    ("dwg", "image/vnd.dwg"),
    ("dxf", "image/vnd.dxf"),
    ("dylib", "application/x-mach-binary"),
    ("ear", "application/java-archive"),
    ("editorconfig", "text/plain"),
    ("edn", "application/edn"),
    ("egg", "application/zip"),
    ("elf", "application/x-elf"),
    ("elm", "text/x-elm"),
    ("emf", "image/emf"),
    ("eml", "message/rfc822"),
    ("env", "text/plain"),
    ("eot", "application/vnd.ms-fontobject"),
    ("eps", "application/postscript"),
    ("epub", "application/epub+zip"),
    ("erb", "text/x-ruby"),
    ("erf", "image/x-epson-erf"),
    ("erl", "text/x-erlang"),
    ("eslintignore", "text/plain"),
    ("eslintrc", "application/json"),
    ("ex", "text/x-elixir"),
    ("exe", "application/vnd.microsoft.portable-executable"),
    ("exr", "image/x-exr"),
    ("exs", "text/x-elixir"),
    ("f", "text/x-fortran"),
    ("f4v", "video/x-f4v"),
    ("f90", "text/x-fortran"),
    ("fb2", "application/x-fictionbook+xml"),
    ("fbx", "application/octet-stream"),
    ("feather", "application/vnd.apache.arrow.file"),
    ("fish", "application/x-sh"),
    ("flac", "audio/flac"),
    ("flv", "video/x-flv"),
    ("for", "text/x-fortran"),
    ("fs", "text/x-fsharp"),
    ("fsx", "text/x-fsharp"),
    ("gem", "application/x-tar"),
    ("geojson", "application/geo+json"),
    ("gif", "image/gif"),
    ("gitattributes", "text/plain"),
    ("gitignore", "text/plain"),
    ("gitmodules", "text/plain"),
    ("glb", "model/gltf-binary"),
    ("glsl", "text/x-glsl"),
    ("gltf", "model/gltf+json"),
    ("go", "text/x-go"),
    ("gpg", "application/pgp-encrypted"),
    ("gpx", "application/gpx+xml"),
    ("gql", "application/graphql"),
    ("gradle", "text/x-groovy"),
    ("graphql", "application/graphql"),
    ("groovy", "text/x-groovy"),
    ("gz", "application/gzip"),
    ("h", "text/x-c"),
    ("h264", "video/h264"),
    ("h265", "video/h265"),
    ("h5", "application/x-hdf5"),
    ("har", "application/json"),
    ("hcl", "text/x-hcl"),
    ("hdf5", "application/x-hdf5"),
    ("hdr", "image/vnd.radiance"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("hh", "text/x-c++"),
    ("hlsl", "text/x-hlsl"),
    ("hpp", "text/x-c++"),
    ("hrl", "text/x-erlang"),
    ("hs", "text/x-haskell"),
    ("htm", "text/html"),
    ("html", "text/html"),
    ("hxx", "text/x-c++"),
    ("icns", "image/icns"),
    ("ico", "image/vnd.microsoft.icon"),
    ("ics", "text/calendar"),
    ("img", "application/octet-stream"),
    ("ini", "text/plain"),
    ("ipa", "application/octet-stream"),
    ("ipc", "application/vnd.apache.arrow.stream"),
    ("ipynb", "application/x-ipynb+json"),
    ("iso", "application/x-iso9660-image"),
    ("ivf", "video/x-ivf"),
    ("jar", "application/java-archive"),
    ("java", "text/x-java"),
    ("jfif", "image/jpeg"),
    ("jl", "text/x-julia"),
    ("jp2", "image/jp2"),
    ("jpe", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("js", "text/javascript"),
    ("jshintrc", "application/json"),
    ("json", "application/json"),
    ("json5", "application/json5"),
    ("jsonl", "application/jsonl"),
    ("jsonld", "application/ld+json"),
    ("jsx", "text/jsx"),
    ("jxl", "image/jxl"),
    ("kar", "audio/midi"),
    ("kdc", "image/x-kodak-kdc"),
    ("key", "application/vnd.apple.keynote"),
    ("kml", "application/vnd.google-earth.kml+xml"),
    ("kmz", "application/vnd.google-earth.kmz"),
    ("kt", "text/x-kotlin"),
    ("kts", "text/x-kotlin"),
    ("ktx", "image/ktx"),
    ("ktx2", "image/ktx2"),
    ("latex", "application/x-latex"),
    ("less", "text/x-less"),
    ("lhs", "text/x-haskell"),
    ("lib", "application/x-archive"),
    ("lock", "text/plain"),
    ("log", "text/plain"),
    ("lua", "text/x-lua"),
    ("lz", "application/x-lzip"),
    ("lz4", "application/x-lz4"),
    ("lzma", "application/x-lzma"),
    ("m", "text/x-objcsrc"),
    ("m2ts", "video/mp2t"),
    ("m2v", "video/mpeg"),
    ("m3u", "audio/x-mpegurl"),
    ("m3u8", "application/vnd.apple.mpegurl"),
    ("m4a", "audio/mp4"),
    ("m4b", "audio/mp4"),
    ("m4v", "video/x-m4v"),
    ("map", "application/json"),
    ("markdown", "text/markdown"),
    ("mat", "application/x-matlab-data"),
    ("md", "text/markdown"),
    ("mdb", "application/x-msaccess"),
    ("mdx", "text/mdx"),
    ("mht", "message/rfc822"),
    ("mhtml", "message/rfc822"),
    ("mid", "audio/midi"),
    ("midi", "audio/midi"),
    ("mjs", "text/javascript"),
    ("mk", "text/x-makefile"),
    ("mka", "audio/x-matroska"),
    ("mkv", "video/x-matroska"),
    ("ml", "text/x-ocaml"),
    ("mli", "text/x-ocaml"),
    ("mm", "text/x-objc++src"),
    ("mobi", "application/x-mobipocket-ebook"),
    ("mov", "video/quicktime"),
    ("move", "text/x-move"),
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("mpd", "application/dash+xml"),
    ("mpe", "video/mpeg"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("mpga", "audio/mpeg"),
    ("mrw", "image/x-minolta-mrw"),
    ("msg", "application/vnd.ms-outlook"),
    ("msgpack", "application/msgpack"),
    ("msi", "application/x-msi"),
    ("mtl", "model/mtl"),
    ("mts", "video/mp2t"),
    ("nc", "application/x-netcdf"),
    ("ndjson", "application/x-ndjson"),
    ("nef", "image/x-nikon-nef"),
    ("nfo", "text/plain"),
    ("nim", "text/x-nim"),
    ("nix", "text/x-nix"),
    ("npmignore", "text/plain"),
    ("npmrc", "text/plain"),
    ("npy", "application/x-npy"),
    ("npz", "application/x-npz"),
    ("nrw", "image/x-nikon-nrw"),
    ("numbers", "application/vnd.apple.numbers"),
    ("nupkg", "application/zip"),
    ("nvmrc", "text/plain"),
    ("o", "application/x-object"),
    ("obj", "model/obj"),
    ("odf", "application/vnd.oasis.opendocument.formula"),
    ("odg", "application/vnd.oasis.opendocument.graphics"),
    ("odp", "application/vnd.oasis.opendocument.presentation"),
    ("ods", "application/vnd.oasis.opendocument.spreadsheet"),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("oga", "audio/ogg"),
    ("ogg", "audio/ogg"),
    ("ogv", "video/ogg"),
    ("one", "application/onenote"),
    ("onnx", "application/onnx"),
    ("opml", "text/x-opml"),
    ("opus", "audio/opus"),
    ("orc", "application/x-orc"),
    ("orf", "image/x-olympus-orf"),
    ("org", "text/x-org"),
    ("otf", "font/otf"),
    ("oxps", "application/oxps"),
    ("p12", "application/x-pkcs12"),
    ("pages", "application/vnd.apple.pages"),
    ("parquet", "application/vnd.apache.parquet"),
    ("pas", "text/x-pascal"),
    ("patch", "text/x-diff"),
    ("pb", "application/x-protobuf"),
    ("pbm", "image/x-portable-bitmap"),
    ("pcx", "image/x-pcx"),
    ("pdf", "application/pdf"),
    ("pef", "image/x-pentax-pef"),
    ("pem", "application/x-pem-file"),
    ("pfb", "application/x-font-type1"),
    ("pfx", "application/x-pkcs12"),
    ("pgm", "image/x-portable-graymap"),
    ("php", "application/x-httpd-php"),
    ("pickle", "application/octet-stream"),
    ("pkl", "application/octet-stream"),
    ("pl", "text/x-perl"),
    ("pls", "audio/x-scpls"),
    ("ply", "model/ply"),
    ("pm", "text/x-perl"),
    ("png", "image/png"),
    ("pnm", "image/x-portable-anymap"),
    ("potx", "application/vnd.openxmlformats-officedocument.presentationml.template"),
    ("ppm", "image/x-portable-pixmap"),
    ("pps", "application/vnd.ms-powerpoint"),
    ("ppsx", "application/vnd.openxmlformats-officedocument.presentationml.slideshow"),
    ("ppt", "application/vnd.ms-powerpoint"),
    ("pptm", "application/vnd.ms-powerpoint.presentation.macroenabled.12"),
    ("pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation"),
    ("prettierignore", "text/plain"),
    ("prettierrc", "application/json"),
    ("properties", "text/plain"),
    ("proto", "text/x-protobuf"),
    ("ps", "application/postscript"),
    ("ps1", "text/x-powershell"),
    ("psd", "image/vnd.adobe.photoshop"),
    ("psm1", "text/x-powershell"),
    ("pt", "application/octet-stream"),
    ("pth", "application/octet-stream"),
    ("py", "text/x-python"),
    ("pyi", "text/x-python"),
    ("pyw", "text/x-python"),
    ("pyx", "text/x-cython"),
    ("qoi", "image/qoi"),
    ("qt", "video/quicktime"),
    ("r", "text/x-r"),
    ("ra", "audio/x-realaudio"),
    ("raf", "image/x-fuji-raf"),
    ("rar", "application/vnd.rar"),
    ("rb", "text/x-ruby"),
    ("rdata", "application/x-r-data"),
    ("rds", "application/x-r-data"),
    ("rgb", "image/x-rgb"),
    ("rm", "application/vnd.rn-realmedia"),
    ("rmvb", "application/vnd.rn-realmedia-vbr"),
    ("rpm", "application/x-rpm"),
    ("rs", "text/x-rust"),
    ("rss", "application/rss+xml"),
    ("rst", "text/x-rst"),
    ("rtf", "application/rtf"),
    ("rw2", "image/x-panasonic-rw2"),
    ("s", "text/x-asm"),
    ("safetensors", "application/octet-stream"),
    ("sass", "text/x-sass"),
    ("sav", "application/x-spss-sav"),
    ("sc", "text/x-scala"),
    ("scala", "text/x-scala"),
    ("scss", "text/x-scss"),
    ("sh", "application/x-sh"),
    ("shtml", "text/html"),
    ("sig", "application/pgp-signature"),
    ("snd", "audio/basic"),
    ("so", "application/x-sharedlib"),
    ("sol", "text/x-solidity"),
    ("spx", "audio/ogg"),
    ("sql", "application/sql"),
    ("sqlite", "application/vnd.sqlite3"),
    ("sqlite3", "application/vnd.sqlite3"),
    ("sr2", "image/x-sony-sr2"),
    ("srf", "image/x-sony-srf"),
    ("srt", "application/x-subrip"),
    ("srw", "image/x-samsung-srw"),
    ("ssa", "text/x-ssa"),
    ("step", "model/step"),
    ("stl", "model/stl"),
    ("stp", "model/step"),
    ("sub", "text/plain"),
    ("svelte", "text/x-svelte"),
    ("svg", "image/svg+xml"),
    ("svgz", "image/svg+xml"),
    ("swf", "application/x-shockwave-flash"),
    ("swift", "text/x-swift"),
    ("tar", "application/x-tar"),
    ("tbz2", "application/x-bzip2"),
    ("tex", "application/x-tex"),
    ("text", "text/plain"),
    ("tf", "text/x-terraform"),
    ("tfrecord", "application/octet-stream"),
    ("tfvars", "text/x-terraform"),
    ("tga", "image/x-tga"),
    ("tgz", "application/gzip"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("toml", "application/toml"),
    ("topojson", "application/json"),
    ("torrent", "application/x-bittorrent"),
    ("ts", "text/typescript"),
    ("tsv", "text/tab-separated-values"),
    ("tsx", "text/tsx"),
    ("ttc", "font/collection"),
    ("ttf", "font/ttf"),
    ("txt", "text/plain"),
    ("txz", "application/x-xz"),
    ("usdz", "model/vnd.usdz+zip"),
    ("v", "text/x-v"),
    ("vb", "text/x-vb"),
    ("vcard", "text/vcard"),
    ("vcf", "text/vcard"),
    ("vob", "video/dvd"),
    ("vsd", "application/vnd.visio"),
    ("vsdx", "application/vnd.ms-visio.drawing"),
    ("vsix", "application/zip"),
    ("vtt", "text/vtt"),
    ("vue", "text/x-vue"),
    ("vy", "text/x-vyper"),
    ("war", "application/java-archive"),
    ("wasm", "application/wasm"),
    ("wat", "text/x-wat"),
    ("wav", "audio/wav"),
    ("wbmp", "image/vnd.wap.wbmp"),
    ("weba", "audio/webm"),
    ("webm", "video/webm"),
    ("webmanifest", "application/manifest+json"),
    ("webp", "image/webp"),
    ("wgsl", "text/x-wgsl"),
    ("whl", "application/zip"),
    ("wma", "audio/x-ms-wma"),
    ("wmf", "image/wmf"),
    ("wmv", "video/x-ms-wmv"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("wpd", "application/vnd.wordperfect"),
    ("wv", "audio/wavpack"),
    ("x3f", "image/x-sigma-x3f"),
    ("xbm", "image/x-xbitmap"),
    ("xcf", "image/x-xcf"),
    ("xhtml", "application/xhtml+xml"),
    ("xls", "application/vnd.ms-excel"),
    ("xlsb", "application/vnd.ms-excel.sheet.binary.macroenabled.12"),
    ("xlsm", "application/vnd.ms-excel.sheet.macroenabled.12"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ("xlt", "application/vnd.ms-excel"),
    ("xltx", "application/vnd.openxmlformats-officedocument.spreadsheetml.template"),
    ("xml", "application/xml"),
    ("xpi", "application/x-xpinstall"),
    ("xpm", "image/x-xpixmap"),
    ("xps", "application/vnd.ms-xpsdocument"),
    ("xsd", "application/xml"),
    ("xsl", "application/xslt+xml"),
    ("xslt", "application/xslt+xml"),
    ("xul", "application/vnd.mozilla.xul+xml"),
    ("xz", "application/x-xz"),
    ("y4m", "video/x-yuv4mpeg"),
    ("yaml", "text/yaml"),
    ("yml", "text/yaml"),
    ("z", "application/x-compress"),
    ("zig", "text/x-zig"),
    ("zip", "application/zip"),
    ("zsh", "application/x-sh"),
    ("zst", "application/zstd"),
];

/// Read-only view over the extension table.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionTable {
    entries: &'static [(&'static str, &'static str)],
}

/// Every known extension, mapped to its content type.
pub static EXTENSION_TO_CONTENT_TYPE: ExtensionTable = ExtensionTable { entries: ENTRIES };

impl ExtensionTable {
    /// Returns the content type for an already normalized (lowercase, dot-free) extension.
    pub fn get(&self, extension: &str) -> Option<&'static str> {
        self.entries
            .binary_search_by(|(key, _)| (*key).cmp(extension))
            .ok()
            .map(|index| self.entries[index].1)
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.get(extension).is_some()
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(extension, content type)` pairs in extension order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + use<> {
        self.entries.iter().copied()
    }

    pub fn extensions(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.entries.iter().map(|(extension, _)| *extension)
    }

    /// The raw sorted slice backing the table
    pub const fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// Compile-time lookup used to derive the shortcut constants from the table.
///
/// Panics (and therefore fails the build when used in a `const`) if the extension is missing.
pub(crate) const fn content_type_of(extension: &str) -> &'static str {
    let mut index = 0;
    while index < ENTRIES.len() {
        if bytes_eq(ENTRIES[index].0.as_bytes(), extension.as_bytes()) {
            return ENTRIES[index].1;
        }
        index += 1;
    }

    panic!("extension is not present in the content type table");
}

const fn bytes_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    let mut index = 0;
    while index < left.len() {
        if left[index] != right[index] {
            return false;
        }
        index += 1;
    }
    true
}
