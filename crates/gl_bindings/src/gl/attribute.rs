//! Vertex attribute descriptors
//!
//! An [`Attribute`] describes how one shader input is fed from a vertex
//! buffer. Descriptors are plain values and need no context; binding one
//! against a context's limits is done with
//! [`Context::check_attribute`](crate::gl::Context::check_attribute).

use crate::gl::{GlError, GlResult};

/// How the attribute data is presented to the shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum AttributeKind {
    /// Floating-point shader input, integer data converted as-is
    Generic = 0,
    /// Floating-point shader input, integer data normalized to `[0, 1]` / `[-1, 1]`
    GenericNormalized = 1,
    /// Integer shader input
    Integral = 2,
    /// Double-precision shader input
    Long = 3,
}

/// Component count of one attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum AttributeComponents {
    /// One component
    One = 1,
    /// Two components
    Two = 2,
    /// Three components
    Three = 3,
    /// Four components
    Four = 4,
    /// Four components in BGRA order (`GL_BGRA`)
    Bgra = 0x80E1,
}

/// Data type of the attribute in the vertex buffer, using GL type constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum AttributeDataType {
    /// `GL_UNSIGNED_BYTE`
    UnsignedByte = 0x1401,
    /// `GL_BYTE`
    Byte = 0x1400,
    /// `GL_UNSIGNED_SHORT`
    UnsignedShort = 0x1403,
    /// `GL_SHORT`
    Short = 0x1402,
    /// `GL_UNSIGNED_INT`
    UnsignedInt = 0x1405,
    /// `GL_INT`
    Int = 0x1404,
    /// `GL_HALF_FLOAT`
    Half = 0x140B,
    /// `GL_FLOAT`
    Float = 0x1406,
    /// `GL_DOUBLE`
    Double = 0x140A,
    /// `GL_UNSIGNED_INT_10F_11F_11F_REV`
    UnsignedInt10f11f11fRev = 0x8C3B,
    /// `GL_UNSIGNED_INT_2_10_10_10_REV`
    UnsignedInt2101010Rev = 0x8368,
    /// `GL_INT_2_10_10_10_REV`
    Int2101010Rev = 0x8D9F,
}

impl AttributeKind {
    /// Raw value
    pub fn raw(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for AttributeKind {
    type Error = GlError;

    fn try_from(raw: u32) -> GlResult<Self> {
        match raw {
            0 => Ok(Self::Generic),
            1 => Ok(Self::GenericNormalized),
            2 => Ok(Self::Integral),
            3 => Ok(Self::Long),
            _ => Err(GlError::InvalidArgument(format!("{raw} is not a valid attribute kind"))),
        }
    }
}

impl AttributeComponents {
    /// Raw value: the component count, or `GL_BGRA`
    pub fn raw(self) -> u32 {
        self as u32
    }

    /// Number of components
    pub fn count(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four | Self::Bgra => 4,
        }
    }
}

impl TryFrom<u32> for AttributeComponents {
    type Error = GlError;

    fn try_from(raw: u32) -> GlResult<Self> {
        match raw {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            0x80E1 => Ok(Self::Bgra),
            _ => Err(GlError::InvalidArgument(format!("0x{raw:x} is not a valid attribute component count"))),
        }
    }
}

impl AttributeDataType {
    /// Raw GL type constant
    pub fn raw(self) -> u32 {
        self as u32
    }

    /// Size of one component in bytes; packed types report the whole value
    pub fn size(self) -> u32 {
        match self {
            Self::UnsignedByte | Self::Byte => 1,
            Self::UnsignedShort | Self::Short | Self::Half => 2,
            Self::UnsignedInt | Self::Int | Self::Float => 4,
            Self::Double => 8,
            Self::UnsignedInt10f11f11fRev | Self::UnsignedInt2101010Rev | Self::Int2101010Rev => 4,
        }
    }

    /// Plain integer type
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            Self::UnsignedByte | Self::Byte | Self::UnsignedShort | Self::Short | Self::UnsignedInt | Self::Int
        )
    }

    /// All components packed into a single 32-bit value
    pub fn is_packed(self) -> bool {
        matches!(self, Self::UnsignedInt10f11f11fRev | Self::UnsignedInt2101010Rev | Self::Int2101010Rev)
    }

    fn is_packed_2101010(self) -> bool {
        matches!(self, Self::UnsignedInt2101010Rev | Self::Int2101010Rev)
    }
}

impl TryFrom<u32> for AttributeDataType {
    type Error = GlError;

    fn try_from(raw: u32) -> GlResult<Self> {
        let data_type = match raw {
            0x1401 => Self::UnsignedByte,
            0x1400 => Self::Byte,
            0x1403 => Self::UnsignedShort,
            0x1402 => Self::Short,
            0x1405 => Self::UnsignedInt,
            0x1404 => Self::Int,
            0x140B => Self::Half,
            0x1406 => Self::Float,
            0x140A => Self::Double,
            0x8C3B => Self::UnsignedInt10f11f11fRev,
            0x8368 => Self::UnsignedInt2101010Rev,
            0x8D9F => Self::Int2101010Rev,
            _ => return Err(GlError::InvalidArgument(format!("0x{raw:x} is not a valid attribute data type"))),
        };
        Ok(data_type)
    }
}

/// Immutable vertex attribute descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    kind: AttributeKind,
    location: u32,
    components: AttributeComponents,
    data_type: AttributeDataType,
}

impl Attribute {
    /// Create a descriptor, rejecting combinations GL does not accept
    ///
    /// # Errors
    /// `InvalidArgument` when the kind, component count and data type do not
    /// form a valid `glVertexAttrib*Pointer` call.
    pub fn new(
        kind: AttributeKind,
        location: u32,
        components: AttributeComponents,
        data_type: AttributeDataType,
    ) -> GlResult<Self> {
        if let Err(reason) = check_combination(kind, components, data_type) {
            log::warn!("Rejected attribute at location {}: {}", location, reason);
            return Err(GlError::InvalidArgument(reason));
        }
        Ok(Self { kind, location, components, data_type })
    }

    /// Descriptor for a combination known to be valid
    pub(crate) fn new_unchecked(
        kind: AttributeKind,
        location: u32,
        components: AttributeComponents,
        data_type: AttributeDataType,
    ) -> Self {
        debug_assert!(check_combination(kind, components, data_type).is_ok());
        Self { kind, location, components, data_type }
    }

    /// Create a descriptor from raw values
    ///
    /// `kind` is the [`AttributeKind`] index, `components` a count of 1 to 4
    /// or `GL_BGRA`, `data_type` a GL type constant.
    pub fn from_raw(kind: u32, location: u32, components: u32, data_type: u32) -> GlResult<Self> {
        Self::new(
            AttributeKind::try_from(kind)?,
            location,
            AttributeComponents::try_from(components)?,
            AttributeDataType::try_from(data_type)?,
        )
    }

    /// Attribute kind
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Shader input location
    pub fn location(&self) -> u32 {
        self.location
    }

    /// Component count
    pub fn components(&self) -> AttributeComponents {
        self.components
    }

    /// Data type in the vertex buffer
    pub fn data_type(&self) -> AttributeDataType {
        self.data_type
    }

    /// Size of one attribute value in the vertex buffer, in bytes
    pub fn vector_size(&self) -> u32 {
        if self.data_type.is_packed() {
            self.data_type.size()
        } else {
            self.components.count() * self.data_type.size()
        }
    }
}

fn check_combination(
    kind: AttributeKind,
    components: AttributeComponents,
    data_type: AttributeDataType,
) -> Result<(), String> {
    match kind {
        AttributeKind::Integral if !data_type.is_integral() => {
            return Err(format!("integral attributes need an integer type, got {data_type:?}"));
        }
        AttributeKind::Long if data_type != AttributeDataType::Double => {
            return Err(format!("long attributes need Double, got {data_type:?}"));
        }
        AttributeKind::GenericNormalized if !(data_type.is_integral() || data_type.is_packed_2101010()) => {
            return Err(format!("{data_type:?} cannot be normalized"));
        }
        _ => {}
    }

    if components == AttributeComponents::Bgra {
        if kind != AttributeKind::GenericNormalized {
            return Err(format!("BGRA attributes must be normalized, got {kind:?}"));
        }
        if !(data_type == AttributeDataType::UnsignedByte || data_type.is_packed_2101010()) {
            return Err(format!("BGRA attributes need UnsignedByte or a 2-10-10-10 type, got {data_type:?}"));
        }
    }

    if data_type.is_packed_2101010() && components.count() != 4 {
        return Err(format!("{data_type:?} needs four components, got {components:?}"));
    }

    if data_type == AttributeDataType::UnsignedInt10f11f11fRev {
        if kind != AttributeKind::Generic {
            return Err(format!("{data_type:?} needs a generic attribute, got {kind:?}"));
        }
        if components != AttributeComponents::Three {
            return Err(format!("{data_type:?} needs three components, got {components:?}"));
        }
    }

    Ok(())
}
