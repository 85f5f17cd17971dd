/// AttributeDescriptor - how to slice a buffer's bytes into one shader input

use crate::driver::AttribDataType;
use crate::error::Result;
use crate::core_bail;

/// Describes one attribute location fed from an interleaved vertex buffer
///
/// `stride` is the byte distance between consecutive vertices; `offset` is
/// the byte position of this attribute within a vertex. A stride of 0 means
/// tightly packed (the driver derives the stride from the component size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Attribute location in the shader (layout(location = N))
    pub location: u32,
    /// Number of components (1-4)
    pub components: u32,
    /// Data type of one component
    pub data_type: AttribDataType,
    /// Whether integer data is normalized to [0,1] / [-1,1]
    pub normalized: bool,
    /// Stride in bytes between consecutive vertices (0 = tightly packed)
    pub stride: u32,
    /// Offset in bytes of this attribute within a vertex
    pub offset: u32,
}

impl AttributeDescriptor {
    /// Float attribute, the tutorials' common case
    pub fn floats(location: u32, components: u32, stride: u32, offset: u32) -> Self {
        Self {
            location,
            components,
            data_type: AttribDataType::F32,
            normalized: false,
            stride,
            offset,
        }
    }

    /// Bytes covered by one element of this attribute
    pub fn byte_span(&self) -> u32 {
        self.components * self.data_type.size_bytes()
    }

    /// Validate the descriptor invariants
    ///
    /// # Errors
    ///
    /// Configuration error when the component count is outside 1-4, or the
    /// attribute does not fit inside a non-zero stride.
    pub fn validate(&self) -> Result<()> {
        if self.components == 0 || self.components > 4 {
            core_bail!(
                "novagl::AttributeDescriptor",
                "component count {} out of range 1-4 (location {})",
                self.components,
                self.location
            );
        }

        if self.stride > 0 {
            let end = self.offset.checked_add(self.byte_span()).ok_or_else(|| {
                crate::core_err!(
                    "novagl::AttributeDescriptor",
                    "attribute range overflow at location {}",
                    self.location
                )
            })?;
            if end > self.stride {
                core_bail!(
                    "novagl::AttributeDescriptor",
                    "attribute at location {} does not fit its stride: offset {} + {} bytes > stride {}",
                    self.location,
                    self.offset,
                    self.byte_span(),
                    self.stride
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "attribute_tests.rs"]
mod tests;
