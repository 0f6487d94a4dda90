//! Node identifier discovery for UUIDv1.

use std::error;

use super::RandSource;
use crate::GenerateError;

/// The 48-bit node identifier embedded in UUIDv1.
pub type NodeId = [u8; 6];

/// A network interface as seen by the node identifier resolver.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Interface {
    /// The interface name, used for diagnostics only.
    pub name: String,
    /// Whether the interface is a loopback interface.
    pub loopback: bool,
    /// Whether the interface is a point-to-point link.
    pub point_to_point: bool,
    /// The hardware address of the interface, possibly empty.
    pub hardware_addr: Vec<u8>,
}

/// A trait that enumerates the network interfaces of the host.
pub trait InterfaceSource {
    /// Returns the network interfaces in system order.
    fn interfaces(&self) -> Result<Vec<Interface>, Box<dyn error::Error + Send + Sync>>;
}

/// The default [`InterfaceSource`] that reads the interfaces of the running host.
///
/// Without the `mac_address` crate feature, enumeration always fails and the resolver falls back
/// to a random node identifier.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SystemInterfaces;

#[cfg(feature = "mac_address")]
impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Result<Vec<Interface>, Box<dyn error::Error + Send + Sync>> {
        let iter = mac_address::MacAddressIterator::new()?;
        Ok(iter
            .map(|mac| {
                let bytes = mac.bytes();
                Interface {
                    name: mac_address::name_by_mac_address(&mac)
                        .ok()
                        .flatten()
                        .unwrap_or_default(),
                    // loopback interfaces report an all-zero link address
                    loopback: bytes == [0; 6],
                    point_to_point: false,
                    hardware_addr: bytes.to_vec(),
                }
            })
            .collect())
    }
}

#[cfg(not(feature = "mac_address"))]
impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Result<Vec<Interface>, Box<dyn error::Error + Send + Sync>> {
        Err("hardware address discovery is disabled".into())
    }
}

/// Resolves the node identifier for a UUIDv1 generator.
///
/// Returns the hardware address of the first interface that is neither loopback nor
/// point-to-point and has a 6-byte address. If no interface qualifies or enumeration fails, falls
/// back to [`random_node`].
pub fn resolve<I, R>(source: &I, rng: &mut R) -> Result<NodeId, GenerateError>
where
    I: InterfaceSource + ?Sized,
    R: RandSource + ?Sized,
{
    match source.interfaces() {
        Ok(interfaces) => {
            let found = interfaces
                .iter()
                .filter(|e| !e.loopback && !e.point_to_point)
                .find_map(|e| Some((e, <[u8; 6]>::try_from(e.hardware_addr.as_slice()).ok()?)));
            if let Some((e, node)) = found {
                log::debug!("using hardware address of interface {:?} as node id", e.name);
                return Ok(node);
            }
            log::debug!("no interface with a 48-bit hardware address; using random node id");
        }
        Err(err) => {
            log::debug!("could not enumerate network interfaces ({}); using random node id", err);
        }
    }
    random_node(rng)
}

/// Generates a random node identifier with the multicast bit set, so that it can never collide
/// with a real hardware address (RFC 4122 §4.5).
pub fn random_node<R: RandSource + ?Sized>(rng: &mut R) -> Result<NodeId, GenerateError> {
    let mut node: NodeId = [0; 6];
    rng.try_fill_bytes(&mut node)
        .map_err(GenerateError::NodeResolution)?;
    node[0] |= 0x01;
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::{resolve, Interface, InterfaceSource, SystemInterfaces};
    use crate::generator::tests::{interface, FakeInterfaces, FixedRand};
    use crate::generator::with_rand08::OsRandSource;
    use crate::GenerateError;

    /// Returns first qualifying hardware address
    #[test]
    fn returns_first_qualifying_hardware_address() {
        let source = FakeInterfaces(Some(vec![
            Interface {
                loopback: true,
                ..interface("lo", &[0, 0, 0, 0, 0, 0])
            },
            Interface {
                point_to_point: true,
                ..interface("ppp0", &[2, 2, 2, 2, 2, 2])
            },
            interface("ib0", &[3; 20]),
            interface("tun0", &[]),
            interface("eth0", &[0x00, 0x1b, 0x63, 0x84, 0x45, 0xe6]),
            interface("eth1", &[0x00, 0x1b, 0x63, 0x84, 0x45, 0xe7]),
        ]));
        let mut rng = FixedRand::failing_after(0, 0);
        assert_eq!(
            resolve(&source, &mut rng).unwrap(),
            [0x00, 0x1b, 0x63, 0x84, 0x45, 0xe6]
        );
    }

    /// Falls back to random multicast node without qualifying interface
    #[test]
    fn falls_back_to_random_multicast_node_without_qualifying_interface() {
        let source = FakeInterfaces(Some(vec![Interface {
            loopback: true,
            ..interface("lo", &[0xaa; 6])
        }]));
        assert_eq!(
            resolve(&source, &mut FixedRand::new(0x00)).unwrap(),
            [0x01, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            resolve(&FakeInterfaces(Some(vec![])), &mut FixedRand::new(0xfe)).unwrap(),
            [0xff, 0xfe, 0xfe, 0xfe, 0xfe, 0xfe]
        );
    }

    /// Falls back to random multicast node upon enumeration failure
    #[test]
    fn falls_back_to_random_multicast_node_upon_enumeration_failure() {
        let node = resolve(&FakeInterfaces(None), &mut OsRandSource::default()).unwrap();
        assert_eq!(node[0] & 0x01, 0x01);
    }

    /// Reports node resolution failure if fallback has no entropy
    #[test]
    fn reports_node_resolution_failure_if_fallback_has_no_entropy() {
        let err = resolve(&FakeInterfaces(None), &mut FixedRand::failing_after(0, 0)).unwrap_err();
        assert!(matches!(err, GenerateError::NodeResolution(_)));
    }

    /// Resolves some node on the running host
    #[test]
    fn resolves_some_node_on_the_running_host() {
        let node = resolve(&SystemInterfaces, &mut OsRandSource::default()).unwrap();
        if let Ok(interfaces) = SystemInterfaces.interfaces() {
            let real = interfaces
                .iter()
                .any(|e| !e.loopback && e.hardware_addr == node);
            assert!(real || node[0] & 0x01 == 0x01);
        }
    }
}
