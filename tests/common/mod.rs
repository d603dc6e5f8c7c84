#![allow(dead_code)]
use rcgen::{date_time_ymd, CertificateParams, KeyPair};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

pub struct TestCertificatePaths {
    pub dir: TempDir,
    pub cert: PathBuf,
    pub key: PathBuf,
}

impl TestCertificatePaths {
    pub fn cert_str(&self) -> String {
        self.cert.display().to_string()
    }

    pub fn key_str(&self) -> String {
        self.key.display().to_string()
    }
}

/// Paths inside a fresh scratch directory, nothing written yet.
pub fn certificate_paths() -> TestCertificatePaths {
    let dir = TempDir::new().unwrap();
    let cert = dir.path().join("tls.cert");
    let key = dir.path().join("tls.key");
    TestCertificatePaths { dir, cert, key }
}

/// Writes a new self-signed `localhost` pair valid until the given date.
pub fn write_certificate(cert_path: &Path, key_path: &Path, not_after: (i32, u8, u8)) {
    let key_pair = KeyPair::generate().unwrap();
    let mut params = CertificateParams::new(vec!["localhost".to_string(), "127.0.0.1".to_string()]).unwrap();
    params.not_before = date_time_ymd(2000, 1, 1);
    params.not_after = date_time_ymd(not_after.0, not_after.1, not_after.2);
    let cert = params.self_signed(&key_pair).unwrap();
    fs::write(key_path, key_pair.serialize_pem()).unwrap();
    fs::write(cert_path, cert.pem()).unwrap();
}

pub fn write_valid_certificate(paths: &TestCertificatePaths) {
    write_certificate(&paths.cert, &paths.key, (2049, 12, 31));
}

pub fn set_modified(path: &Path, time: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}
