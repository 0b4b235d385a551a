#![allow(dead_code)]

use flagscope_api::{ApiError, ApiResult, PackageQuery};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Package query answering from a fixed table, counting invocations.
pub struct MockPackages {
    packages: Vec<(&'static str, Vec<&'static str>)>,
    pub calls: AtomicUsize,
    failing: Mutex<Option<&'static str>>,
}

impl MockPackages {
    pub fn gtk_and_vte() -> Self {
        Self {
            packages: vec![
                ("gtk+-3.0", vec!["-pthread", "-I/usr/include/gtk-3.0", "-Ithird_party/gtk"]),
                ("vte-2.91", vec!["-I/usr/include/vte-2.91"]),
            ],
            calls: AtomicUsize::new(0),
            failing: Mutex::new(None),
        }
    }

    /// Make queries for `package` fail until cleared.
    pub fn fail_on(&self, package: Option<&'static str>) {
        *self.failing.lock().unwrap() = package;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PackageQuery for MockPackages {
    fn query_package_flags(&self, name: &str) -> ApiResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let invocation_error = || ApiError::ProcessInvocation {
            program: "pkg-config".to_string(),
            package: name.to_string(),
            reason: "exited with exit status: 1".to_string(),
        };

        if *self.failing.lock().unwrap() == Some(name) {
            return Err(invocation_error());
        }

        self.packages
            .iter()
            .find(|(pkg, _)| *pkg == name)
            .map(|(_, flags)| flags.iter().map(|f| f.to_string()).collect())
            .ok_or_else(invocation_error)
    }
}
