//! Mesh primitive and index type enums

use crate::gl::{GlError, GlResult};

/// Primitive topology, using GL draw mode constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum MeshPrimitive {
    /// `GL_POINTS`
    Points = 0x0000,
    /// `GL_LINES`
    Lines = 0x0001,
    /// `GL_LINE_LOOP`
    LineLoop = 0x0002,
    /// `GL_LINE_STRIP`
    LineStrip = 0x0003,
    /// `GL_TRIANGLES`
    Triangles = 0x0004,
    /// `GL_TRIANGLE_STRIP`
    TriangleStrip = 0x0005,
    /// `GL_TRIANGLE_FAN`
    TriangleFan = 0x0006,
}

impl MeshPrimitive {
    /// Raw GL constant
    pub fn raw(self) -> u32 {
        self as u32
    }

    /// Number of primitives drawn from `count` vertices or indices
    pub fn primitive_count(self, count: u32) -> u32 {
        match self {
            Self::Points => count,
            Self::Lines => count / 2,
            Self::LineLoop => if count >= 2 { count } else { 0 },
            Self::LineStrip => count.saturating_sub(1),
            Self::Triangles => count / 3,
            Self::TriangleStrip | Self::TriangleFan => count.saturating_sub(2),
        }
    }
}

impl TryFrom<u32> for MeshPrimitive {
    type Error = GlError;

    fn try_from(raw: u32) -> GlResult<Self> {
        match raw {
            0x0000 => Ok(Self::Points),
            0x0001 => Ok(Self::Lines),
            0x0002 => Ok(Self::LineLoop),
            0x0003 => Ok(Self::LineStrip),
            0x0004 => Ok(Self::Triangles),
            0x0005 => Ok(Self::TriangleStrip),
            0x0006 => Ok(Self::TriangleFan),
            _ => Err(GlError::InvalidArgument(format!("0x{raw:x} is not a mesh primitive"))),
        }
    }
}

/// Index buffer element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum MeshIndexType {
    /// `GL_UNSIGNED_BYTE`
    UnsignedByte = 0x1401,
    /// `GL_UNSIGNED_SHORT`
    UnsignedShort = 0x1403,
    /// `GL_UNSIGNED_INT`
    UnsignedInt = 0x1405,
}

impl MeshIndexType {
    /// Raw GL constant
    pub fn raw(self) -> u32 {
        self as u32
    }

    /// Size of one index in bytes
    pub fn size(self) -> u32 {
        match self {
            Self::UnsignedByte => 1,
            Self::UnsignedShort => 2,
            Self::UnsignedInt => 4,
        }
    }

    /// Smallest index type able to address `vertex_count` vertices
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count <= 1 << 8 {
            Self::UnsignedByte
        } else if vertex_count <= 1 << 16 {
            Self::UnsignedShort
        } else {
            Self::UnsignedInt
        }
    }
}

impl TryFrom<u32> for MeshIndexType {
    type Error = GlError;

    fn try_from(raw: u32) -> GlResult<Self> {
        match raw {
            0x1401 => Ok(Self::UnsignedByte),
            0x1403 => Ok(Self::UnsignedShort),
            0x1405 => Ok(Self::UnsignedInt),
            _ => Err(GlError::InvalidArgument(format!("0x{raw:x} is not a mesh index type"))),
        }
    }
}
