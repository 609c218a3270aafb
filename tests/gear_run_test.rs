#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::json;
use tempfile::{TempDir, tempdir};

use fs_stc::{Error, GearSettings, OutputDirPolicy, run_gear};

// Writing an executable while another test thread forks can leave the file busy.
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

struct Gear {
    _tmp: TempDir,
    root: PathBuf,
    scan: PathBuf,
    settings: GearSettings,
}

impl Gear {
    fn new() -> Self {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("gear");
        let data = tmp.path().join("data");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&data).unwrap();

        let scan = data.join("scan.nii.gz");
        fs::write(&scan, b"raw").unwrap();

        let environ = tmp.path().join("gear_environ.json");
        fs::write(&environ, r#"{"GEAR_MARK": "from-environ-file"}"#).unwrap();

        let mut settings = GearSettings::with_root(&root);
        settings.environ_path = environ;

        Gear {
            _tmp: tmp,
            root,
            scan,
            settings,
        }
    }

    fn write_job(&self, config: serde_json::Value, extra_inputs: serde_json::Value) {
        let mut inputs = json!({
            "NIFTI": {"base": "file", "location": {"path": self.scan, "name": "scan.nii.gz"}}
        });
        if let (Some(inputs), Some(extra)) = (inputs.as_object_mut(), extra_inputs.as_object()) {
            for (role, record) in extra {
                inputs.insert(role.clone(), record.clone());
            }
        }
        let job = json!({
            "config": config,
            "inputs": inputs,
            "destination": {"id": "abc123", "type": "analysis"}
        });
        fs::write(&self.settings.config_path, job.to_string()).unwrap();
    }

    /// Install a stand-in filtershift that records its arguments and environment.
    fn install_executable(&self, body: &str) {
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{args}'\nprintf '%s' \"$GEAR_MARK\" > '{env}'\n{body}\n",
            args = self.args_log().display(),
            env = self.env_log().display(),
        );
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        fs::write(&self.settings.executable, script).unwrap();
        fs::set_permissions(&self.settings.executable, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn install_producing_executable(&self) {
        self.install_executable(&format!(": > '{}'", self.produced().display()));
    }

    fn produced(&self) -> PathBuf {
        self.scan.with_file_name("scan_st.nii.gz")
    }

    fn args_log(&self) -> PathBuf {
        self.root.join("args.log")
    }

    fn env_log(&self) -> PathBuf {
        self.root.join("env.log")
    }

    fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.args_log())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn run(&self) -> fs_stc::Result<fs_stc::RunReport> {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        run_gear(&self.settings)
    }
}

fn standard_config() -> serde_json::Value {
    json!({"tr": 2.0, "cf": 0.01, "hpf": true, "lpf": false, "axis": "z", "hires": false})
}

fn exists(path: &Path) -> bool {
    path.try_exists().unwrap()
}

#[test]
fn test_end_to_end_hpf_run() {
    let gear = Gear::new();
    gear.write_job(standard_config(), json!({}));
    gear.install_producing_executable();

    let report = gear.run().unwrap();

    assert_eq!(
        gear.recorded_args(),
        vec![
            format!("--in={}", gear.scan.display()),
            "--TR=2.0".to_string(),
            "--cf=0.01".to_string(),
            "--hpf=".to_string(),
        ]
    );
    assert_eq!(
        report.command,
        format!(
            "{} --in={} --TR=2.0 --cf=0.01 --hpf=",
            gear.settings.executable.display(),
            gear.scan.display()
        )
    );
    assert_eq!(report.produced, gear.produced());
    assert_eq!(report.relocated, gear.root.join("output/scan_st.nii.gz"));
    assert!(exists(&report.relocated));
    assert!(report.environment_copy.is_none());
    assert_eq!(
        fs::read_to_string(gear.env_log()).unwrap(),
        "from-environ-file"
    );
}

#[test]
fn test_conflicting_filters_never_launch() {
    let gear = Gear::new();
    gear.write_job(
        json!({"tr": 2.0, "cf": 0.01, "hpf": true, "lpf": true}),
        json!({}),
    );
    gear.install_producing_executable();

    let err = gear.run().unwrap_err();
    assert!(matches!(err, Error::ConflictingOptions { .. }));
    assert!(!exists(&gear.args_log()));
    assert!(!exists(&gear.root.join("output")));
}

#[test]
fn test_conflicting_slice_files_never_launch() {
    let gear = Gear::new();
    gear.write_job(
        standard_config(),
        json!({"timing": "/data/timing.txt", "order": "/data/order.txt"}),
    );
    gear.install_producing_executable();

    assert!(matches!(gear.run(), Err(Error::ConflictingInputs { .. })));
    assert!(!exists(&gear.args_log()));
}

#[test]
fn test_missing_input_never_launches() {
    let gear = Gear::new();
    gear.write_job(standard_config(), json!({}));
    fs::remove_file(&gear.scan).unwrap();
    gear.install_producing_executable();

    assert!(matches!(gear.run(), Err(Error::InputNotFound { .. })));
    assert!(!exists(&gear.args_log()));
}

#[test]
fn test_successful_exit_without_output_is_an_error() {
    let gear = Gear::new();
    gear.write_job(standard_config(), json!({}));
    gear.install_executable("exit 0");

    let err = gear.run().unwrap_err();
    assert!(matches!(err, Error::OutputMissing { ref path } if *path == gear.produced()));
    assert!(exists(&gear.args_log()));
}

#[test]
fn test_nonzero_exit_surfaces_stderr() {
    let gear = Gear::new();
    gear.write_job(standard_config(), json!({}));
    gear.install_executable("echo 'bad slice order' >&2\nexit 3");

    match gear.run() {
        Err(Error::ProcessFailed { status, stderr }) => {
            assert_eq!(status.code(), Some(3));
            assert_eq!(stderr, "bad slice order\n");
        }
        other => panic!("expected ProcessFailed, got {other:?}"),
    }
}

#[test]
fn test_require_policy_rejects_missing_output_dir() {
    let mut gear = Gear::new();
    gear.settings.output_dir_policy = OutputDirPolicy::Require;
    gear.write_job(standard_config(), json!({}));
    gear.install_producing_executable();

    let err = gear.run().unwrap_err();
    assert!(matches!(err, Error::OutputDirMissing { .. }));

    fs::create_dir(&gear.settings.output_dir).unwrap();
    let report = gear.run().unwrap();
    assert!(exists(&report.relocated));
}

#[test]
fn test_environment_file_is_copied_when_enabled() {
    let mut gear = Gear::new();
    gear.settings.copy_environment = true;
    gear.write_job(standard_config(), json!({}));
    gear.install_producing_executable();

    let report = gear.run().unwrap();
    let copy = report.environment_copy.unwrap();
    assert_eq!(copy, gear.settings.output_dir.join("gear_environ.json"));
    assert!(exists(&copy));
}

#[test]
fn test_timing_file_and_options_reach_executable() {
    let gear = Gear::new();
    gear.write_job(
        json!({"tr": 1.5, "cf": 0.1, "lpf": true, "reftime": 0.75, "refslice": 2,
               "start": 4, "dir": 1, "axis": "y", "hires": true}),
        json!({"timing": {"location": {"path": "/data/timing.txt"}}}),
    );
    gear.install_producing_executable();

    gear.run().unwrap();
    assert_eq!(
        gear.recorded_args(),
        vec![
            format!("--in={}", gear.scan.display()),
            "--TR=1.5".to_string(),
            "--cf=0.1".to_string(),
            "--lpf=".to_string(),
            "--timing=/data/timing.txt".to_string(),
            "--reftime=0.75".to_string(),
            "--refslice=2".to_string(),
            "--axis=y".to_string(),
            "--hires=".to_string(),
        ]
    );
}

#[test]
fn test_output_dir_holding_the_result_keeps_its_contents() {
    let mut gear = Gear::new();
    gear.settings.output_dir = gear.scan.parent().unwrap().to_path_buf();
    gear.write_job(standard_config(), json!({}));
    gear.install_executable(&format!(
        "printf 'corrected' > '{}'",
        gear.produced().display()
    ));

    let report = gear.run().unwrap();
    assert_eq!(report.relocated, gear.produced());
    assert_eq!(fs::read(gear.produced()).unwrap(), b"corrected");
}
