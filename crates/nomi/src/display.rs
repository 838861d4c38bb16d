//! Text rendering for Nomis and rooms.
//!
//! Everything here writes plain lines to a `Write` so commands can target
//! stdout and tests can target a buffer.

use std::io::{self, Write};

use nomi_client::{Nomi, Room};

/// Placeholder shown for a room without a name.
pub const EMPTY_NAME: &str = "<empty>";

/// The five-line detail block for one Nomi.
pub fn write_nomi_detail<W: Write>(out: &mut W, nomi: &Nomi) -> io::Result<()> {
    writeln!(out, "- ID: {}", nomi.uuid)?;
    writeln!(out, "- Name: {}", nomi.name)?;
    writeln!(out, "- Gender: {}", nomi.gender)?;
    writeln!(out, "- Created: {}", nomi.created)?;
    writeln!(out, "- Relationship Type: {}", nomi.relationship_type)
}

/// One entry of `list-nomis`: `Name (Relationship)`, or a full block when `full`.
pub fn write_nomi_summary<W: Write>(out: &mut W, nomi: &Nomi, full: bool) -> io::Result<()> {
    if !full {
        return writeln!(out, "{} ({})", nomi.name, nomi.relationship_type);
    }

    writeln!(out, "- ID: {}", nomi.uuid)?;
    writeln!(out, "  Name: {}", nomi.name)?;
    writeln!(out, "  Gender: {}", nomi.gender)?;
    writeln!(out, "  Created: {}", nomi.created)?;
    writeln!(out, "  Relationship: {}", nomi.relationship_type)?;
    writeln!(out)
}

/// Room detail. Note and participant lines appear only when present.
pub fn write_room<W: Write>(out: &mut W, room: &Room) -> io::Result<()> {
    let name = if room.name.is_empty() {
        EMPTY_NAME
    } else {
        room.name.as_str()
    };

    writeln!(out, "Room: {}", name)?;
    writeln!(out, "- UUID: {}", room.uuid)?;
    writeln!(out, "- Created: {}", room.created)?;
    writeln!(out, "- Updated: {}", room.updated)?;
    writeln!(out, "- Status: {}", room.status)?;
    writeln!(out, "- Backchanneling: {}", room.backchanneling_enabled)?;

    if !room.note.is_empty() {
        writeln!(out, "- Note: {}", room.note)?;
    }

    if !room.nomis.is_empty() {
        writeln!(out, "- Nomis:")?;
        for nomi in &room.nomis {
            writeln!(
                out,
                "  • {} ({}, {})",
                nomi.name, nomi.gender, nomi.relationship_type
            )?;
        }
    }

    Ok(())
}
