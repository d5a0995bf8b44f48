use crate::areas::settings::Settings;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// One comparison run: its settings, input workspace and output sink
pub struct Session {
    settings: Settings,
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Session {
    pub fn new(
        path: &Path,
        settings: Settings,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;

        Ok(Session {
            settings,
            workspace: Workspace::new(path.into_boxed_path()),
            writer: RefCell::new(writer),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
