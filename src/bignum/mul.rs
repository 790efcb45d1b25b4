//! Schoolbook multiplication.

use crate::bignum::config::Limb;
use crate::bignum::error::Result;
use crate::bignum::limb::mul_acc;
use crate::bignum::mpi::Mpi;

/// `X = A * B`. Canonical zero if either operand is zero; otherwise
/// `sign = sign(A) * sign(B)`.
pub fn mul_mpi(a: &Mpi, b: &Mpi) -> Result<Mpi> {
    let la = a.used_len();
    let lb = b.used_len();

    if la == 0 || lb == 0 {
        return Ok(Mpi::zero());
    }

    let mut out = Mpi::new();
    out.grow(la + lb)?;

    for i in 0..la {
        let ai = a.limb(i);
        if ai == 0 {
            continue;
        }

        let mut carry: Limb = 0;
        for j in 0..lb {
            let (sum, c) = mul_acc(ai, b.limb(j), out.limbs[i + j], carry);
            out.limbs[i + j] = sum;
            carry = c;
        }
        out.limbs[i + lb] += carry;
    }

    out.sign = a.sign() * b.sign();
    Ok(out)
}

/// `X = A * b`, where `b` is an unsigned single limb. `X`'s sign follows `A`.
pub fn mul_int(a: &Mpi, b: Limb) -> Result<Mpi> {
    let la = a.used_len();
    if la == 0 || b == 0 {
        return Ok(Mpi::zero());
    }

    let mut out = Mpi::new();
    out.grow(la + 1)?;

    let mut carry: Limb = 0;
    for i in 0..la {
        let (sum, c) = mul_acc(a.limb(i), b, 0, carry);
        out.limbs[i] = sum;
        carry = c;
    }
    out.limbs[la] = carry;

    out.sign = a.sign();
    Ok(out)
}
