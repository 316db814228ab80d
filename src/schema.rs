/// Element representation of a host array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    Utf8,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementType::UInt8 => write!(f, "uint8"),
            ElementType::UInt16 => write!(f, "uint16"),
            ElementType::UInt32 => write!(f, "uint32"),
            ElementType::UInt64 => write!(f, "uint64"),
            ElementType::Int8 => write!(f, "int8"),
            ElementType::Int16 => write!(f, "int16"),
            ElementType::Int32 => write!(f, "int32"),
            ElementType::Int64 => write!(f, "int64"),
            ElementType::Float32 => write!(f, "single"),
            ElementType::Float64 => write!(f, "double"),
            ElementType::Boolean => write!(f, "logical"),
            ElementType::Utf8 => write!(f, "char"),
        }
    }
}

impl ElementType {
    pub fn is_unsigned(&self) -> bool {
        matches!(self, ElementType::UInt8 | ElementType::UInt16 | ElementType::UInt32 | ElementType::UInt64)
    }
    pub fn is_signed(&self) -> bool {
        matches!(self, ElementType::Int8 | ElementType::Int16 | ElementType::Int32 | ElementType::Int64)
    }
    /// Integer types can be widened to `u64` indices without truncation.
    pub fn is_index_compatible(&self) -> bool { self.is_unsigned() || self.is_signed() }
    pub fn is_numeric(&self) -> bool {
        self.is_index_compatible() || matches!(self, ElementType::Float32 | ElementType::Float64)
    }
}
