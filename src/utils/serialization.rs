use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use bincode;
use bincode::Options;

use crate::error::{Error, Result};

pub fn save_to_disk<T: Serialize, TPath: AsRef<Path>>(data: &T, path: TPath) -> Result<()> {
    let options = bincode::DefaultOptions::new();
    let options = options.with_no_limit();
    // Write all bytes to the target file
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    options.serialize_into(writer, data).map_err(Error::Encode)
}

pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> Result<T> {
    // Open the file and read all bytes
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let options = bincode::DefaultOptions::new();
    let options = options.with_no_limit();
    options.deserialize_from(reader).map_err(Error::Decode)
}

#[cfg(test)]
mod tests {
    use super::{load_from_disk, save_to_disk};
    use crate::error::Result;

    #[test]
    fn test_roundtrip() {
        let data = vec![(String::from("dice"), 4u32), (String::from("vine"), 4u32)];
        let path = std::env::temp_dir().join("squaredle_serialization_roundtrip.bin");
        save_to_disk(&data, &path).unwrap();
        let loaded: Vec<(String, u32)> = load_from_disk(&path).unwrap();
        assert_eq!(data, loaded);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("squaredle_serialization_missing.bin");
        let loaded: Result<Vec<u8>> = load_from_disk(&path);
        assert!(loaded.is_err());
    }
}
