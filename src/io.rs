use std::fmt;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use image::ImageFormat;
use image::RgbImage;
use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::seed::Seed;

/// Where the output image goes when no path is given.
pub const DEFAULT_OUTPUT: &str = "out.png";

/// Where the seed row is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// The whole content of a file
    File(PathBuf),

    /// A single line of standard input
    Stdin,
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::File(path) => write!(f, "{}", path.display()),
            SeedSource::Stdin => f.write_str("stdin"),
        }
    }
}

/// Read and validate the seed from `source`.
pub fn read_seed(source: &SeedSource) -> Result<Seed> {
    let read_err = |source_err| Error::ReadSeed {
        source_name: source.to_string(),
        source: source_err,
    };

    let text = match source {
        SeedSource::File(path) => {
            let file = File::open(path).map_err(read_err)?;
            read_all(file).map_err(read_err)?
        }
        SeedSource::Stdin => read_line(io::stdin().lock()).map_err(read_err)?,
    };

    debug!(%source, "read seed text");

    Ok(Seed::parse(&text)?)
}

/// Read everything from `reader`. Used for seed files.
pub fn read_all<R: Read>(mut reader: R) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    Ok(text)
}

/// Read a single line from `reader`, keeping its line break. Used for stdin.
pub fn read_line<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    Ok(line)
}

/// Read the seed from any reader, taking its whole content.
pub fn read_seed_from<R: Read>(reader: R) -> Result<Seed> {
    let text = read_all(BufReader::new(reader)).map_err(|source| Error::ReadSeed {
        source_name: "reader".to_string(),
        source,
    })?;

    Ok(Seed::parse(&text)?)
}

/// Encode `img` as PNG and write it to `path`, replacing any existing file.
pub fn write_png(img: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::WriteImage {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), "wrote png");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedError;

    #[test]
    fn read_line_stops_at_first_line() {
        let input = b"0110\n1111\n";
        let line = read_line(input.as_slice()).unwrap();

        assert_eq!(line, "0110\n");
        assert_eq!(Seed::parse(&line).unwrap().to_string(), "0110");
    }

    #[test]
    fn read_seed_from_reader() {
        let seed = read_seed_from(b"10101\n".as_slice()).unwrap();

        assert_eq!(seed.to_string(), "10101");
    }

    #[test]
    fn multi_line_file_is_rejected() {
        let err = read_seed_from(b"01\n10\n".as_slice()).unwrap_err();

        assert!(matches!(
            err,
            Error::Seed(SeedError::InvalidChar {
                ch: '\n',
                position: 2
            })
        ));
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("eca-io-test-does-not-exist.txt");
        let err = read_seed(&SeedSource::File(path)).unwrap_err();

        assert!(matches!(err, Error::ReadSeed { .. }));
    }
}
