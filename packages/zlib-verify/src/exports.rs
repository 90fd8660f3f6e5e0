// Export table for the zlib shared library. Produced by the export-table
// generator from the upstream linker scripts; the table ends with an empty
// terminator entry. Do not edit by hand.

pub const ZLIB_EXPORT_TABLE: &[&str] = &[
    "zlibVersion",
    "zlibCompileFlags",
    "deflateInit_",
    "deflateInit2_",
    "deflate",
    "deflateEnd",
    "deflateReset",
    "deflateParams",
    "deflateSetDictionary",
    "deflateGetDictionary",
    "deflateCopy",
    "deflateBound",
    "deflatePending",
    "deflatePrime",
    "deflateSetHeader",
    "deflateTune",
    "inflateInit_",
    "inflateInit2_",
    "inflate",
    "inflateEnd",
    "inflateReset",
    "inflateReset2",
    "inflateSetDictionary",
    "inflateGetDictionary",
    "inflateSync",
    "inflateSyncPoint",
    "inflateCopy",
    "inflatePrime",
    "inflateMark",
    "inflateGetHeader",
    "inflateBackInit_",
    "inflateBack",
    "inflateBackEnd",
    "compress",
    "compress2",
    "compressBound",
    "uncompress",
    "uncompress2",
    "adler32",
    "adler32_z",
    "adler32_combine",
    "crc32",
    "crc32_z",
    "crc32_combine",
    "get_crc_table",
    "zError",
    "gzopen",
    "gzdopen",
    "gzbuffer",
    "gzsetparams",
    "gzread",
    "gzfread",
    "gzwrite",
    "gzfwrite",
    "gzprintf",
    "gzputs",
    "gzgets",
    "gzputc",
    "gzgetc",
    "gzungetc",
    "gzflush",
    "gzseek",
    "gzrewind",
    "gztell",
    "gzoffset",
    "gzeof",
    "gzdirect",
    "gzclose",
    "gzclose_r",
    "gzclose_w",
    "gzerror",
    "gzclearerr",
    "",
];
