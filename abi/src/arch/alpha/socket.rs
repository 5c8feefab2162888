//! alpha `asm/socket.h` (5.10.x).
//!
//! Only the `SOL_SOCKET` options that normal programs set are made OSF/1
//! compatible; the Linux-specific options follow the i386 numbering.
//!
//! The plain time options (`SO_TIMESTAMP`, `SO_RCVTIMEO`, ...) are the `_OLD`
//! values here because alpha longs are 64-bit. The `*_for` functions resolve
//! the same names for any [`TimeAbi`].

use crate::catalog::{Arch, KernelSeries};
use crate::time::TimeAbi;

/// ABI of the only alpha userland there is.
pub const ALPHA_TIME_ABI: TimeAbi = TimeAbi::LP64;

crate::uapi_table! {
    /// Symbols of alpha `asm/socket.h`.
    pub static CATALOG = (Arch::Alpha, "asm/socket.h", KernelSeries::V5_10);

    /// Level for `setsockopt(2)` socket options.
    pub const SOL_SOCKET: i32 = 0xffff;

    pub const SO_DEBUG: i32 = 0x0001;
    pub const SO_REUSEADDR: i32 = 0x0004;
    pub const SO_KEEPALIVE: i32 = 0x0008;
    pub const SO_DONTROUTE: i32 = 0x0010;
    pub const SO_BROADCAST: i32 = 0x0020;
    pub const SO_LINGER: i32 = 0x0080;
    pub const SO_OOBINLINE: i32 = 0x0100;
    pub const SO_REUSEPORT: i32 = 0x0200;

    pub const SO_TYPE: i32 = 0x1008;
    pub const SO_ERROR: i32 = 0x1007;
    pub const SO_SNDBUF: i32 = 0x1001;
    pub const SO_RCVBUF: i32 = 0x1002;
    pub const SO_SNDBUFFORCE: i32 = 0x100a;
    pub const SO_RCVBUFFORCE: i32 = 0x100b;
    pub const SO_RCVLOWAT: i32 = 0x1010;
    pub const SO_SNDLOWAT: i32 = 0x1011;
    pub const SO_RCVTIMEO_OLD: i32 = 0x1012;
    pub const SO_SNDTIMEO_OLD: i32 = 0x1013;
    pub const SO_ACCEPTCONN: i32 = 0x1014;
    pub const SO_PROTOCOL: i32 = 0x1028;
    pub const SO_DOMAIN: i32 = 0x1029;

    pub const SO_NO_CHECK: i32 = 11;
    pub const SO_PRIORITY: i32 = 12;
    pub const SO_BSDCOMPAT: i32 = 14;

    pub const SO_PASSCRED: i32 = 17;
    pub const SO_PEERCRED: i32 = 18;
    pub const SO_BINDTODEVICE: i32 = 25;

    pub const SO_ATTACH_FILTER: i32 = 26;
    pub const SO_DETACH_FILTER: i32 = 27;
    pub const SO_GET_FILTER: i32 = SO_ATTACH_FILTER => alias;

    pub const SO_PEERNAME: i32 = 28;

    pub const SO_PEERSEC: i32 = 30;
    pub const SO_PASSSEC: i32 = 34;

    /// Security levels as per NRL IPv6; accepted but ignored.
    pub const SO_SECURITY_AUTHENTICATION: i32 = 19;
    pub const SO_SECURITY_ENCRYPTION_TRANSPORT: i32 = 20;
    pub const SO_SECURITY_ENCRYPTION_NETWORK: i32 = 21;

    pub const SO_MARK: i32 = 36;

    pub const SO_RXQ_OVFL: i32 = 40;

    pub const SO_WIFI_STATUS: i32 = 41;
    pub const SCM_WIFI_STATUS: i32 = SO_WIFI_STATUS => alias;
    pub const SO_PEEK_OFF: i32 = 42;

    /// Use the last 4 bytes of skb data as FCS.
    pub const SO_NOFCS: i32 = 43;

    pub const SO_LOCK_FILTER: i32 = 44;
    pub const SO_SELECT_ERR_QUEUE: i32 = 45;
    pub const SO_BUSY_POLL: i32 = 46;
    pub const SO_MAX_PACING_RATE: i32 = 47;
    pub const SO_BPF_EXTENSIONS: i32 = 48;
    pub const SO_INCOMING_CPU: i32 = 49;

    pub const SO_ATTACH_BPF: i32 = 50;
    pub const SO_DETACH_BPF: i32 = SO_DETACH_FILTER => alias;

    pub const SO_ATTACH_REUSEPORT_CBPF: i32 = 51;
    pub const SO_ATTACH_REUSEPORT_EBPF: i32 = 52;

    pub const SO_CNX_ADVICE: i32 = 53;
    pub const SCM_TIMESTAMPING_OPT_STATS: i32 = 54;
    pub const SO_MEMINFO: i32 = 55;
    pub const SO_INCOMING_NAPI_ID: i32 = 56;
    pub const SO_COOKIE: i32 = 57;
    pub const SCM_TIMESTAMPING_PKTINFO: i32 = 58;
    pub const SO_PEERGROUPS: i32 = 59;
    pub const SO_ZEROCOPY: i32 = 60;

    pub const SO_TXTIME: i32 = 61;
    pub const SCM_TXTIME: i32 = SO_TXTIME => alias;

    pub const SO_BINDTOIFINDEX: i32 = 62;

    pub const SO_TIMESTAMP_OLD: i32 = 29;
    pub const SO_TIMESTAMPNS_OLD: i32 = 35;
    pub const SO_TIMESTAMPING_OLD: i32 = 37;

    pub const SO_TIMESTAMP_NEW: i32 = 63;
    pub const SO_TIMESTAMPNS_NEW: i32 = 64;
    pub const SO_TIMESTAMPING_NEW: i32 = 65;

    pub const SO_RCVTIMEO_NEW: i32 = 66;
    pub const SO_SNDTIMEO_NEW: i32 = 67;

    pub const SO_DETACH_REUSEPORT_BPF: i32 = 68;

    pub const SO_TIMESTAMP: i32 = so_timestamp_for(ALPHA_TIME_ABI);
    pub const SO_TIMESTAMPNS: i32 = so_timestampns_for(ALPHA_TIME_ABI);
    pub const SO_TIMESTAMPING: i32 = so_timestamping_for(ALPHA_TIME_ABI);

    pub const SO_RCVTIMEO: i32 = so_rcvtimeo_for(ALPHA_TIME_ABI);
    pub const SO_SNDTIMEO: i32 = so_sndtimeo_for(ALPHA_TIME_ABI);

    pub const SCM_TIMESTAMP: i32 = SO_TIMESTAMP => alias;
    pub const SCM_TIMESTAMPNS: i32 = SO_TIMESTAMPNS => alias;
    pub const SCM_TIMESTAMPING: i32 = SO_TIMESTAMPING => alias;
}

#[inline]
pub const fn so_timestamp_for(abi: TimeAbi) -> i32 {
    abi.select(SO_TIMESTAMP_OLD, SO_TIMESTAMP_NEW)
}

#[inline]
pub const fn so_timestampns_for(abi: TimeAbi) -> i32 {
    abi.select(SO_TIMESTAMPNS_OLD, SO_TIMESTAMPNS_NEW)
}

#[inline]
pub const fn so_timestamping_for(abi: TimeAbi) -> i32 {
    abi.select(SO_TIMESTAMPING_OLD, SO_TIMESTAMPING_NEW)
}

#[inline]
pub const fn so_rcvtimeo_for(abi: TimeAbi) -> i32 {
    abi.select(SO_RCVTIMEO_OLD, SO_RCVTIMEO_NEW)
}

#[inline]
pub const fn so_sndtimeo_for(abi: TimeAbi) -> i32 {
    abi.select(SO_SNDTIMEO_OLD, SO_SNDTIMEO_NEW)
}

/// Whether `opt` is one of the time-carrying options, old or new form.
pub const fn is_time_option(opt: i32) -> bool {
    matches!(
        opt,
        SO_TIMESTAMP_OLD
            | SO_TIMESTAMPNS_OLD
            | SO_TIMESTAMPING_OLD
            | SO_TIMESTAMP_NEW
            | SO_TIMESTAMPNS_NEW
            | SO_TIMESTAMPING_NEW
            | SO_RCVTIMEO_OLD
            | SO_SNDTIMEO_OLD
            | SO_RCVTIMEO_NEW
            | SO_SNDTIMEO_NEW
    )
}
