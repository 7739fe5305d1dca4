//! Argument validation.
//!
//! Every operation declares its parameters as a fixed list of [`Param`]s.
//! [`arguments`] checks arity first, then each position in order, and fails
//! on the first mismatch with an `ArgumentError`. Nothing is decoded and no
//! key material is touched until the whole call shape is valid.

use crate::{
    codec::{self, ByteArg, Value},
    error::{ErrorKind, Result},
};

/// Kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Text or raw bytes
    Bytes,
    /// Unsigned 32-bit integer
    U32,
}

/// A named, typed operation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Name used in error messages
    pub name: &'static str,
    /// Accepted kind
    pub kind: ArgKind,
}

impl Param {
    /// Byte-like parameter.
    pub const fn bytes(name: &'static str) -> Self {
        Self { name, kind: ArgKind::Bytes }
    }

    /// Unsigned 32-bit integer parameter.
    pub const fn u32(name: &'static str) -> Self {
        Self { name, kind: ArgKind::U32 }
    }
}

/// A single validated argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Byte-like argument
    Bytes(ByteArg<'a>),
    /// Unsigned 32-bit integer
    U32(u32),
}

/// Validated arguments for one call, in parameter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args<'a> {
    args: Vec<Arg<'a>>,
}

impl<'a> Args<'a> {
    /// Decode all arguments as byte sequences.
    ///
    /// `N` must equal the declared arity and every parameter must be
    /// byte-like. A mismatch means the caller asked for the wrong shape, which
    /// is reported as an `ArgumentError`.
    pub fn bytes<const N: usize>(&self) -> Result<[&'a [u8]; N]> {
        if self.args.len() != N {
            return Err(shape_mismatch());
        }

        let mut out: [&'a [u8]; N] = [&[]; N];
        for (slot, arg) in out.iter_mut().zip(&self.args) {
            match *arg {
                Arg::Bytes(bytes) => *slot = codec::decode(bytes),
                Arg::U32(_) => return Err(shape_mismatch()),
            }
        }
        Ok(out)
    }

    /// Integer argument at `index`.
    pub fn u32(&self, index: usize) -> Result<u32> {
        match self.args.get(index) {
            Some(Arg::U32(n)) => Ok(*n),
            _ => Err(shape_mismatch()),
        }
    }
}

fn shape_mismatch() -> crate::GatewayError {
    ErrorKind::Argument.error("argument shape does not match the operation signature")
}

/// Validate a call against its parameter list.
pub fn arguments<'a>(params: &[Param], args: &'a [Value]) -> Result<Args<'a>> {
    arity(params, args)?;

    let args = params
        .iter()
        .zip(args)
        .map(|(param, value)| match param.kind {
            ArgKind::Bytes => byte_arg(param, value).map(Arg::Bytes),
            ArgKind::U32 => u32_arg(param, value).map(Arg::U32),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Args { args })
}

/// Check that exactly one argument was supplied per parameter.
pub fn arity(params: &[Param], args: &[Value]) -> Result<()> {
    if args.len() == params.len() {
        return Ok(());
    }

    let message = if params.is_empty() {
        format!("Takes no args, got {}", args.len())
    } else {
        let names: Vec<&str> = params.iter().map(|p| p.name).collect();
        format!("Need {} args: {}", params.len(), names.join(", "))
    };
    Err(ErrorKind::Argument.error(message))
}

/// Accept text or raw bytes.
pub fn byte_arg<'a>(param: &Param, value: &'a Value) -> Result<ByteArg<'a>> {
    ByteArg::from_value(value).ok_or_else(|| {
        ErrorKind::Argument.error(format!(
            "{} needs to be a string or bytes, got {}",
            param.name,
            value.type_name()
        ))
    })
}

/// Accept an integer, or an integral float, in `0..=u32::MAX`.
pub fn u32_arg(param: &Param, value: &Value) -> Result<u32> {
    let parsed = match *value {
        Value::Integer(n) => u32::try_from(n).ok(),
        Value::Float(f) if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) => {
            Some(f as u32)
        },
        _ => None,
    };

    parsed.ok_or_else(|| {
        ErrorKind::Argument
            .error(format!("{} needs to be an unsigned 32-bit integer", param.name))
    })
}
