//! Opening a file in the platform's default viewer.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};

/// How long to wait after the launcher returns before the caller may delete
/// the previewed file.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
}

impl Platform {
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` identifier to a platform.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::MacOs),
            other => Err(Error::UnsupportedPlatform(other.to_string())),
        }
    }

    pub const fn launcher(self) -> Launcher {
        match self {
            Self::Linux => Launcher {
                program: "xdg-open",
                args: &[],
            },
            Self::Windows => Launcher {
                program: "cmd.exe",
                args: &["/C", "start"],
            },
            Self::MacOs => Launcher {
                program: "open",
                args: &[],
            },
        }
    }
}

/// A viewer command and the arguments placed before the file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launcher {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl Launcher {
    /// Full argument list for opening `path`.
    pub fn args_for(&self, path: &Path) -> Vec<OsString> {
        self.args
            .iter()
            .copied()
            .map(OsString::from)
            .chain(std::iter::once(path.as_os_str().to_owned()))
            .collect()
    }

    /// Resolves the program on `PATH`, runs it against `path` and waits for it.
    fn run(&self, path: &Path) -> Result<()> {
        let resolved = which::which(self.program).map_err(|source| Error::LauncherNotFound {
            program: self.program,
            source,
        })?;
        tracing::debug!(launcher = %resolved.display(), file = %path.display(), "launching viewer");

        let status = Command::new(&resolved)
            .args(self.args_for(path))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| Error::Launch {
                program: self.program,
                source,
            })?;

        if !status.success() {
            tracing::warn!(launcher = self.program, %status, "viewer launcher reported an error");
            return Err(Error::LauncherFailed {
                program: self.program,
                status,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Previewer {
    launcher: Launcher,
    settle: Duration,
}

impl Previewer {
    /// A previewer for the platform this process runs on.
    pub fn new() -> Result<Self> {
        Ok(Self::for_platform(Platform::current()?))
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self {
            launcher: platform.launcher(),
            settle: DEFAULT_SETTLE_DELAY,
        }
    }

    pub fn with_settle_delay(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn launcher(&self) -> Launcher {
        self.launcher
    }

    /// Opens `path` in the default viewer.
    ///
    /// Once the launcher has run, successfully or not, this sleeps for the
    /// settle delay so the viewer can read the file before it is removed.
    /// There is no signal for when the viewer is done, so this is a best guess.
    pub fn preview(&self, path: &Path) -> Result<()> {
        let result = self.launcher.run(path);
        if !matches!(result, Err(Error::LauncherNotFound { .. })) {
            thread::sleep(self.settle);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_supported_platforms() {
        assert_eq!(Platform::from_os("linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_os("windows").unwrap(), Platform::Windows);
        assert_eq!(Platform::from_os("macos").unwrap(), Platform::MacOs);
    }

    #[test]
    fn rejects_unknown_platform() {
        let err = Platform::from_os("plan9").unwrap_err();
        assert!(matches!(err, Error::UnsupportedPlatform(ref os) if os == "plan9"));
        assert_eq!(err.to_string(), "OS not supported: plan9");
    }

    #[test]
    fn launcher_table() {
        assert_eq!(
            Platform::Linux.launcher(),
            Launcher {
                program: "xdg-open",
                args: &[]
            }
        );
        assert_eq!(
            Platform::Windows.launcher(),
            Launcher {
                program: "cmd.exe",
                args: &["/C", "start"]
            }
        );
        assert_eq!(
            Platform::MacOs.launcher(),
            Launcher {
                program: "open",
                args: &[]
            }
        );
    }

    #[test]
    fn path_is_last_argument() {
        let path = Path::new("/tmp/mdp123.html");
        assert_eq!(
            Platform::Windows.launcher().args_for(path),
            vec![
                OsString::from("/C"),
                OsString::from("start"),
                OsString::from("/tmp/mdp123.html")
            ]
        );
        assert_eq!(
            Platform::Linux.launcher().args_for(path),
            vec![OsString::from("/tmp/mdp123.html")]
        );
    }

    #[test]
    fn missing_launcher_is_reported() {
        let previewer = Previewer {
            launcher: Launcher {
                program: "mdp-no-such-viewer-4c1f",
                args: &[],
            },
            settle: Duration::ZERO,
        };
        let err = previewer.preview(Path::new("x.html")).unwrap_err();
        assert!(matches!(
            err,
            Error::LauncherNotFound {
                program: "mdp-no-such-viewer-4c1f",
                ..
            }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn failing_launcher_is_reported() {
        let previewer = Previewer {
            launcher: Launcher {
                program: "false",
                args: &[],
            },
            settle: Duration::ZERO,
        };
        let err = previewer.preview(Path::new("x.html")).unwrap_err();
        assert!(matches!(err, Error::LauncherFailed { program: "false", .. }));
    }

    #[cfg(unix)]
    #[test]
    fn successful_launcher_returns_ok() {
        let previewer = Previewer {
            launcher: Launcher {
                program: "true",
                args: &[],
            },
            settle: Duration::ZERO,
        };
        previewer.preview(Path::new("x.html")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn returns_when_launcher_exits_even_if_viewer_keeps_running() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-open.sh");
        std::fs::write(&script, "sleep 5 &\nexit 0\n").unwrap();
        let script: &'static str =
            Box::leak(script.to_string_lossy().into_owned().into_boxed_str());
        let args: &'static [&'static str] = Box::leak(vec![script].into_boxed_slice());

        let previewer = Previewer {
            launcher: Launcher {
                program: "sh",
                args,
            },
            settle: Duration::ZERO,
        };
        let started = std::time::Instant::now();
        previewer.preview(Path::new("x.html")).unwrap();
        assert!(
            started.elapsed() < Duration::from_secs(3),
            "waited {:?} for a background viewer",
            started.elapsed()
        );
    }

    #[test]
    fn current_platform_resolves_on_supported_hosts() {
        if cfg!(any(target_os = "linux", target_os = "windows", target_os = "macos")) {
            assert!(Previewer::new().is_ok());
        }
    }
}
