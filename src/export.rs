//! Plain-text column output for external plotting tools.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::trajectory::Trajectory;

/// Write one `"<x> <y>"` row per grid point, space-separated, in
/// increasing x order.
pub fn write_columns<W: Write>(w: &mut W, traj: &Trajectory) -> io::Result<()> {
    for (x, y) in traj.iter() {
        writeln!(w, "{} {}", x, y)?;
    }
    Ok(())
}

/// Create `path` and write the trajectory as two space-separated columns.
pub fn export_columns<P: AsRef<Path>>(traj: &Trajectory, path: P) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_columns(&mut file, traj)
}
