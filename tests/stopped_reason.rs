use varsync::{DisconnectReason, RejectReason, StoppedReason};

#[test]
fn disconnect_reasons_map_to_stopped_reasons() {
    assert_eq!(StoppedReason::from(DisconnectReason::None), StoppedReason::None);
    assert_eq!(
        StoppedReason::from(DisconnectReason::Timeout),
        StoppedReason::Timeout
    );
    assert_eq!(
        StoppedReason::from(DisconnectReason::RequestedByRemotePeer),
        StoppedReason::RemoteConnectionClosed
    );
    assert_eq!(
        StoppedReason::from(DisconnectReason::RequestedByLocalPeer),
        StoppedReason::LocalConnectionClosed
    );
    assert_eq!(
        StoppedReason::from(DisconnectReason::InvalidPacket),
        StoppedReason::InvalidPacket
    );
    assert_eq!(
        StoppedReason::from(DisconnectReason::SendBufferFull),
        StoppedReason::SendBufferFull
    );
}

#[test]
fn reject_reasons_map_to_stopped_reasons() {
    assert_eq!(StoppedReason::from(RejectReason::None), StoppedReason::None);
    assert_eq!(
        StoppedReason::from(RejectReason::Timeout),
        StoppedReason::ConnectingTimeout
    );
    assert_eq!(
        StoppedReason::from(RejectReason::ServerFull),
        StoppedReason::ServerFull
    );
    assert_eq!(
        StoppedReason::from(RejectReason::KeyInvalid),
        StoppedReason::KeyInvalid
    );
    assert_eq!(
        StoppedReason::from(RejectReason::ClosedByPeer),
        StoppedReason::ConnectingCancel
    );
}

#[test]
fn unknown_wire_codes_collapse_to_none() {
    // codes a future transport might ship; old peers must not fail on them
    for code in [6u8, 7, 42, 200, u8::MAX] {
        let disconnect = DisconnectReason::from_u8(code);
        assert_eq!(disconnect, DisconnectReason::None);
        assert_eq!(StoppedReason::from(disconnect), StoppedReason::None);
    }
    for code in [5u8, 9, 42, 200, u8::MAX] {
        let reject = RejectReason::from_u8(code);
        assert_eq!(reject, RejectReason::None);
        assert_eq!(StoppedReason::from(reject), StoppedReason::None);
    }
}

#[test]
fn wire_tags_are_the_shipped_values() {
    // these numbers are frozen; renumbering breaks old clients
    assert_eq!(StoppedReason::None.to_u8(), 0);
    assert_eq!(StoppedReason::Timeout.to_u8(), 1);
    assert_eq!(StoppedReason::LocalConnectionClosed.to_u8(), 2);
    assert_eq!(StoppedReason::RemoteConnectionClosed.to_u8(), 3);
    assert_eq!(StoppedReason::ServerFull.to_u8(), 4);
    assert_eq!(StoppedReason::ConnectingTimeout.to_u8(), 5);
    assert_eq!(StoppedReason::ConnectingCancel.to_u8(), 6);
    assert_eq!(StoppedReason::HostModeStopped.to_u8(), 7);
    assert_eq!(StoppedReason::InvalidPacket.to_u8(), 8);
    assert_eq!(StoppedReason::KeyInvalid.to_u8(), 9);
    assert_eq!(StoppedReason::SendBufferFull.to_u8(), 10);
}

#[test]
fn wire_tags_round_trip() {
    let all = [
        StoppedReason::None,
        StoppedReason::Timeout,
        StoppedReason::LocalConnectionClosed,
        StoppedReason::RemoteConnectionClosed,
        StoppedReason::ServerFull,
        StoppedReason::ConnectingTimeout,
        StoppedReason::ConnectingCancel,
        StoppedReason::HostModeStopped,
        StoppedReason::InvalidPacket,
        StoppedReason::KeyInvalid,
        StoppedReason::SendBufferFull,
    ];
    for reason in all {
        assert_eq!(StoppedReason::from_u8(reason.to_u8()), Some(reason));
    }
    assert_eq!(StoppedReason::from_u8(11), None);
    assert_eq!(StoppedReason::from_u8(u8::MAX), None);
}
