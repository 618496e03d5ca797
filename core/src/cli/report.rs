use crate::pipeline::ResidueOutputs;
use std::fmt;

/// Text report formatter for a residue run
pub struct TextReport<'a> {
    outputs: &'a ResidueOutputs,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(outputs: &'a ResidueOutputs) -> Self {
        Self { outputs }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DICOM Residues")?;
        writeln!(f, "==============")?;
        writeln!(f)?;
        writeln!(
            f,
            "First:      {} at {}",
            self.outputs.first_input.display(),
            self.outputs.first_position
        )?;
        writeln!(
            f,
            "Second:     {} at {}",
            self.outputs.second_input.display(),
            self.outputs.second_position
        )?;
        writeln!(f)?;
        writeln!(f, "Output Files")?;
        writeln!(f, "------------")?;
        writeln!(f, "Unfiltered: {}", self.outputs.unfiltered.display())?;
        writeln!(f, "Filtered:   {}", self.outputs.filtered.display())?;

        Ok(())
    }
}
