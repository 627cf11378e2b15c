use crate::errors::{FileOperation, FilesystemError, ManifestError, ScaffoldError};
use indexmap::IndexMap;
use serde::Deserialize;
use std::{
    fs,
    path::{Component, Path},
};

/// `(group directory, subdirectories, placeholder files)`, in creation order.
/// The empty group path is the destination root.
type GroupRow = (&'static str, &'static [&'static str], &'static [&'static str]);

const BUILTIN_GROUPS: &[GroupRow] = &[
    (
        "",
        &["css", "src"],
        &["index.html", "package.json", "README.md"],
    ),
    ("css", &["components", "layouts", "animations"], &["main.css"]),
    (
        "css/components",
        &[],
        &[
            "pig.css",
            "forest.css",
            "truffle.css",
            "ui-panel.css",
            "academy.css",
            "professor-hall.css",
            "achievements.css",
            "location-selector.css",
            "tutorial.css",
        ],
    ),
    (
        "css/layouts",
        &[],
        &["game-layout.css", "mobile.css", "desktop.css"],
    ),
    (
        "css/animations",
        &[],
        &["transitions.css", "particle-effects.css", "ui-animations.css"],
    ),
    (
        "src",
        &["config", "models", "controllers", "views", "utils", "constants"],
        &["main.js"],
    ),
    (
        "src/config",
        &[],
        &[
            "GameConfig.js",
            "TruffleData.js",
            "LocationData.js",
            "AchievementData.js",
        ],
    ),
    (
        "src/models",
        &[],
        &[
            "Game.js",
            "Pig.js",
            "Truffle.js",
            "Location.js",
            "Achievement.js",
            "ProfessorPig.js",
            "SaveData.js",
        ],
    ),
    (
        "src/controllers",
        &[],
        &[
            "GameController.js",
            "PigController.js",
            "TruffleController.js",
            "LocationController.js",
            "UpgradeController.js",
            "AchievementController.js",
            "InputController.js",
        ],
    ),
    ("src/views", &[], &["GameView.js"]),
    (
        "src/views/components",
        &[],
        &[
            "PigRenderer.js",
            "ForestRenderer.js",
            "TruffleRenderer.js",
            "UIPanel.js",
            "ResourceDisplay.js",
            "ProgressBar.js",
            "Button.js",
            "Modal.js",
            "Notification.js",
        ],
    ),
    (
        "src/views/screens",
        &[],
        &[
            "MainGameScreen.js",
            "PigAcademyScreen.js",
            "ProfessorHallScreen.js",
            "AchievementsScreen.js",
            "TutorialScreen.js",
            "VictoryScreen.js",
        ],
    ),
    (
        "src/views/ui",
        &[],
        &[
            "UIManager.js",
            "AnimationManager.js",
            "SoundManager.js",
            "EffectsManager.js",
        ],
    ),
    (
        "src/utils",
        &[],
        &[
            "MathUtils.js",
            "RandomUtils.js",
            "FormatUtils.js",
            "TimeUtils.js",
            "StorageUtils.js",
            "EventEmitter.js",
        ],
    ),
    (
        "src/constants",
        &[],
        &[
            "GameStates.js",
            "EventTypes.js",
            "UIConstants.js",
            "AssetPaths.js",
        ],
    ),
];

/// One directory of the manifest together with what gets created inside it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Group {
    #[serde(default)]
    pub dirs: Vec<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

/// Ordered list of directory groups. Iteration order is creation order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub groups: IndexMap<String, Group>,
}
impl Manifest {
    /// The game skeleton this tool was written for.
    pub fn builtin() -> Self {
        let groups = BUILTIN_GROUPS
            .iter()
            .map(|(path, dirs, files)| {
                let group = Group {
                    dirs: dirs.iter().map(|d| d.to_string()).collect(),
                    files: files.iter().map(|f| f.to_string()).collect(),
                };
                (path.to_string(), group)
            })
            .collect();

        Self { groups }
    }

    /// Loads a manifest from a toml file and validates every entry.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScaffoldError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| FilesystemError::new(FileOperation::Read, path.into(), error))?;

        let manifest: Manifest = toml::from_str(&content).map_err(|err| ManifestError::Parse {
            path: path.to_path_buf(),
            source: err,
        })?;

        manifest.validate()?;

        log::debug!(
            "loaded manifest with {} groups from {}",
            manifest.groups.len(),
            path.display()
        );

        Ok(manifest)
    }

    /// Rejects entries that could land outside the destination root.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (group_path, group) in &self.groups {
            if !is_relative_inside(group_path, true) {
                return Err(ManifestError::InvalidEntry {
                    group: group_path.clone(),
                    entry: group_path.clone(),
                    reason: "group path must stay inside the destination",
                });
            }

            for entry in group.dirs.iter().chain(group.files.iter()) {
                if entry.trim().is_empty() {
                    return Err(ManifestError::InvalidEntry {
                        group: group_path.clone(),
                        entry: entry.clone(),
                        reason: "entry is empty",
                    });
                }
                if !is_relative_inside(entry, false) {
                    return Err(ManifestError::InvalidEntry {
                        group: group_path.clone(),
                        entry: entry.clone(),
                        reason: "entry must be a relative path without '..'",
                    });
                }
            }
        }

        Ok(())
    }
}

// Only plain components (and ".") keep a path below the root it is joined onto.
fn is_relative_inside(raw: &str, allow_empty: bool) -> bool {
    let mut normal_components = 0;

    for component in Path::new(raw).components() {
        match component {
            Component::Normal(_) => normal_components += 1,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }

    allow_empty || normal_components > 0
}
