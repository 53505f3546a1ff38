use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;

/// ファイルパスからBufReaderを作成する
/// パースやデータ変換は呼び出し側で行う
pub fn load_file(file_path: &str) -> Result<BufReader<File>> {
    let file = File::open(file_path)
        .with_context(|| format!("ファイルの読み込みに失敗しました: {}", file_path))?;
    Ok(BufReader::new(file))
}

/// YAMLファイルからSerdeでDeserializeできる型を読み込む
pub fn load_yaml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let buf_reader = load_file(file_path)?;
    serde_yaml::from_reader(buf_reader)
        .with_context(|| format!("YAMLファイルの解析に失敗: {}", file_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().expect("一時ファイルの作成に失敗");
        writeln!(file, "name: blogful\ncount: 3").expect("一時ファイルへの書き込みに失敗");

        let path = file.path().to_string_lossy().to_string();
        let sample: Sample = load_yaml_from_file(&path).expect("YAMLの読み込みに失敗");
        assert_eq!(
            sample,
            Sample {
                name: "blogful".to_string(),
                count: 3
            }
        );
    }

    #[test]
    fn test_load_non_existing_file() {
        // 存在しないファイルでエラーになることを確認
        let result = load_file("non_existent_file.txt");
        assert!(result.is_err(), "存在しないファイルでエラーにならなかった");
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().expect("一時ファイルの作成に失敗");
        writeln!(file, "name: [unterminated").expect("一時ファイルへの書き込みに失敗");

        let path = file.path().to_string_lossy().to_string();
        let result: Result<Sample> = load_yaml_from_file(&path);
        let message = format!("{:#}", result.unwrap_err());
        assert!(
            message.contains("YAMLファイルの解析に失敗"),
            "期待されるエラーメッセージが含まれていません: {}",
            message
        );
    }
}
