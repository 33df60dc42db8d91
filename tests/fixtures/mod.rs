//! Test fixtures for end-to-end generation
//!
//! Builds a scratch layout in a temp directory:
//! - `bootiso.yaml` global settings
//! - `repo/` with per-ISO entry files
//! - `blkid` stand-in script answering from a fixed device table

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Entry file fields, in config-file naming
pub struct EntryFixture<'a> {
    pub name: &'a str,
    pub use_key: &'a str,
    pub boot_path: &'a str,
    pub kernel: &'a str,
    pub initrd: &'a str,
    pub root_dev: &'a str,
    pub grub_dev: &'a str,
    pub iso_path: &'a str,
    pub iso_filename: &'a str,
    pub boot_opts: &'a str,
}

impl EntryFixture<'static> {
    pub fn test_os() -> Self {
        EntryFixture {
            name: "Test OS",
            use_key: "root",
            boot_path: "/boot/",
            kernel: "vmlinuz",
            initrd: "initrd.img",
            root_dev: "/dev/sda1",
            grub_dev: "hd0,1",
            iso_path: "/iso/",
            iso_filename: "test.iso",
            boot_opts: "quiet",
        }
    }
}

impl EntryFixture<'_> {
    pub fn to_yaml(&self) -> String {
        format!(
            "config:\n  name: \"{}\"\n  use: \"{}\"\n  boot_path: \"{}\"\n  kernel: \"{}\"\n  \
             initrd: \"{}\"\n  root_dev: \"{}\"\n  grub_dev: \"{}\"\n  iso_path: \"{}\"\n  \
             iso_filename: \"{}\"\n  boot_opts: \"{}\"\n",
            self.name,
            self.use_key,
            self.boot_path,
            self.kernel,
            self.initrd,
            self.root_dev,
            self.grub_dev,
            self.iso_path,
            self.iso_filename,
            self.boot_opts
        )
    }
}

/// Scratch installation: settings file, repository directory, fake UUID tool
pub struct Workspace {
    pub temp: TempDir,
}

impl Workspace {
    /// Create a workspace whose fake tool knows the given `(device, uuid)` pairs
    pub fn new(devices: &[(&str, &str)]) -> Self {
        let temp = TempDir::new().unwrap();
        let ws = Self { temp };
        fs::create_dir(ws.repo_dir()).unwrap();
        write_fake_blkid(&ws.tool_path(), devices);
        ws.write_settings(&ws.repo_dir(), &ws.tool_path());
        ws
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root().join("bootiso.yaml")
    }

    pub fn repo_dir(&self) -> PathBuf {
        self.root().join("repo")
    }

    pub fn tool_path(&self) -> PathBuf {
        self.root().join("blkid")
    }

    pub fn write_settings(&self, repo: &Path, tool: &Path) {
        let content = format!(
            "global:\n  cfgpath: \"{}\"\n  blkid: \"{}\"\n",
            repo.display(),
            tool.display()
        );
        fs::write(self.settings_path(), content).unwrap();
    }

    pub fn add_entry(&self, file_name: &str, entry: &EntryFixture) -> PathBuf {
        let path = self.repo_dir().join(file_name);
        fs::write(&path, entry.to_yaml()).unwrap();
        path
    }

    pub fn add_raw(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.repo_dir().join(file_name);
        fs::write(&path, content).unwrap();
        path
    }
}

/// Shell script that prints blkid-style output for known devices only
pub fn write_fake_blkid(path: &Path, devices: &[(&str, &str)]) {
    let mut script = String::from("#!/bin/sh\ncase \"$1\" in\n");
    for (device, uuid) in devices {
        script.push_str(&format!(
            "  {device}) echo '{device}: UUID=\"{uuid}\" BLOCK_SIZE=\"4096\" TYPE=\"ext4\" PARTUUID=\"0badf00d-01\"' ;;\n"
        ));
    }
    script.push_str("  *) exit 2 ;;\nesac\n");
    fs::write(path, script).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
