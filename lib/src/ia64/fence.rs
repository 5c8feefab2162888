use core::sync::atomic::{compiler_fence, fence, Ordering};

use super::cpu::Ia64Cpu;
use super::insn::Insn;

/// Compiler-only barrier; emits nothing.
#[inline(always)]
pub fn barrier() {
    compiler_fence(Ordering::SeqCst);
}

/// Memory fence. Also orders host memory.
#[inline]
pub fn mf<C: Ia64Cpu + ?Sized>(cpu: &mut C) {
    fence(Ordering::SeqCst);
    cpu.execute(Insn::Mf);
}

/// Memory acceptance fence.
#[inline]
pub fn mfa<C: Ia64Cpu + ?Sized>(cpu: &mut C) {
    cpu.execute(Insn::MfA);
}

#[inline]
pub fn srlz_i<C: Ia64Cpu + ?Sized>(cpu: &mut C) {
    cpu.execute(Insn::SrlzI);
}

#[inline]
pub fn srlz_d<C: Ia64Cpu + ?Sized>(cpu: &mut C) {
    cpu.execute(Insn::SrlzD);
}

#[inline]
pub fn sync_i<C: Ia64Cpu + ?Sized>(cpu: &mut C) {
    cpu.execute(Insn::SyncI);
}

/// Instruction group stop.
#[inline]
pub fn stop<C: Ia64Cpu + ?Sized>(cpu: &mut C) {
    cpu.execute(Insn::Stop);
}

/// Assembler annotation marking a data serialization point.
#[inline]
pub fn dv_serialize_data<C: Ia64Cpu + ?Sized>(cpu: &mut C) {
    cpu.execute(Insn::SerializeData);
}

#[inline]
pub fn dv_serialize_instruction<C: Ia64Cpu + ?Sized>(cpu: &mut C) {
    cpu.execute(Insn::SerializeInstruction);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ia64::InsnTrace;
    use std::vec;

    #[test]
    fn fence_text() {
        let mut cpu = InsnTrace::new();
        barrier();
        assert!(cpu.is_empty());
        mf(&mut cpu);
        mfa(&mut cpu);
        srlz_i(&mut cpu);
        srlz_d(&mut cpu);
        sync_i(&mut cpu);
        stop(&mut cpu);
        dv_serialize_data(&mut cpu);
        dv_serialize_instruction(&mut cpu);
        assert_eq!(
            cpu.render(),
            vec![
                "mf",
                "mf.a",
                ";; srlz.i ;;",
                ";; srlz.d",
                ";; sync.i",
                ";;",
                ".serialize.data",
                ".serialize.instruction",
            ]
        );
    }
}
