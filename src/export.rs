use crate::error::SceneError;
use crate::scenes::SceneBuffer;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One record per line, every line newline-terminated.
pub fn write_scene(scene: &SceneBuffer, out: &mut impl Write) -> io::Result<()> {
    for record in scene.records() {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

/// Creates or truncates `path` and writes the whole scene into it.
pub fn save_scene(scene: &SceneBuffer, path: impl AsRef<Path>) -> Result<(), SceneError> {
    let path = path.as_ref();
    let write = || -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        write_scene(scene, &mut out)?;
        out.flush()
    };

    write().map_err(|source| SceneError::Write {
        path: path.to_path_buf(),
        source,
    })
}
