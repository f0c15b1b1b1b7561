extern crate md5;

use log::warn;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::{fs::File, io::{self, Read}, path::Path};

const CHUNK_SIZE: usize = 65536;

// get handle to a file, directories are not hashable
pub fn open_file(
                file_path: &Path
            ) -> io::Result<File>
{
    let file = File::open(file_path)?;
    if !file.metadata()?.is_file() {
        return Err(io::Error::new(io::ErrorKind::Other, "not a regular file"));
    }
    Ok(file)
}

/*
    MD5, SHA1 and SHA256 of a file's content in one read pass.
    Any failure leaves all three digests empty.
*/
pub fn hash_file(
                path: &str
            ) -> (String, String, String)
{
    if path.is_empty() {
        return (String::new(), String::new(), String::new());
    }
    match read_digests(Path::new(path)) {
        Ok(d) => d,
        Err(e) => {
            warn!("[autorun_hunter] Hash unavailable for {path}: {e}");
            (String::new(), String::new(), String::new())
        }
    }
}

fn read_digests(
                path: &Path
            ) -> io::Result<(String, String, String)>
{
    let mut file = open_file(path)?;
    let mut md5 = md5::Context::new();
    let mut sha1 = Sha1::new();
    let mut sha256 = Sha256::new();

    // read in chunks so large images are never held in memory
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let bytes = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        md5.consume(&buffer[..bytes]);
        sha1.update(&buffer[..bytes]);
        sha256.update(&buffer[..bytes]);
    }

    Ok((
        format!("{:x}", md5.compute()),
        format!("{:x}", sha1.finalize()),
        format!("{:x}", sha256.finalize()),
    ))
}

#[cfg(test)]
mod tests {
    use super::hash_file;
    use std::fs;

    #[test]
    fn test_hash_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");
        fs::write(&path, b"hello world").unwrap();

        let (md5, sha1, sha256) = hash_file(&path.to_string_lossy());
        assert_eq!(md5, "5eb63bbbe01eeed093cb22bb8f5acdc3");
        assert_eq!(sha1, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
        assert_eq!(
            sha256,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_hash_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        fs::write(&path, b"").unwrap();

        let (md5, sha1, sha256) = hash_file(&path.to_string_lossy());
        assert_eq!(md5, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(
            sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_large_file_spans_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        fs::write(&path, vec![0x41u8; 200_000]).unwrap();

        let (md5, sha1, sha256) = hash_file(&path.to_string_lossy());
        assert_eq!(md5.len(), 32);
        assert_eq!(sha1.len(), 40);
        assert_eq!(sha256.len(), 64);
    }

    #[test]
    fn test_hash_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.exe");

        let empty = (String::new(), String::new(), String::new());
        assert_eq!(hash_file(&missing.to_string_lossy()), empty);
        assert_eq!(hash_file(&dir.path().to_string_lossy()), empty);
        assert_eq!(hash_file(""), empty);
    }
}
