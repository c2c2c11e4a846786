//! Balancer forwarding tests

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::drivers::Call;
    use crate::common::{NodeFactory, RecordingDriver};
    use cloudlb_rs::{BalancerLookup, LoadBalancerDriver, Member};

    #[test]
    fn test_detach_member_forwards_balancer_and_member() {
        let driver = RecordingDriver::new();
        let balancer = driver.balancer(4, 80);
        let member = Member::new(9, "10.0.0.9", 80);

        assert!(assert_ok!(balancer.detach_member(&member)));
        assert_eq!(
            driver.calls(),
            vec![Call::DetachMember {
                balancer: Some("4".to_string()),
                member,
            }]
        );
    }

    #[test]
    fn test_list_members_returns_driver_result() {
        let members = vec![
            Member::new(1, "10.0.0.1", 80),
            Member::new(2, "10.0.0.2", 80),
        ];
        let driver = RecordingDriver::with_members(members.clone());
        let balancer = driver.balancer(4, 80);

        assert_eq!(assert_ok!(balancer.list_members()), members);
        assert_eq!(
            driver.calls(),
            vec![Call::ListMembers {
                balancer: Some("4".to_string())
            }]
        );
    }

    #[test]
    fn test_attach_compute_node_forwards_self() {
        let driver = RecordingDriver::new();
        let balancer = driver.balancer(8, 3000);

        let member = assert_ok!(balancer.attach_compute_node(&NodeFactory::single("203.0.113.50")));
        assert_eq!(member, Member::new("m-1", "203.0.113.50", 3000));
        assert!(matches!(
            &driver.calls()[0],
            Call::AttachMember { balancer: Some(id), .. } if id == "8"
        ));
    }

    #[test]
    fn test_balancers_from_list_forward_to_the_same_driver() {
        let driver = RecordingDriver::new();
        let balancers = assert_ok!(driver.list_balancers());
        assert_eq!(balancers.len(), 2);

        for balancer in &balancers {
            assert!(std::ptr::eq(balancer.driver(), &driver));
            assert_ok!(balancer.list_members());
        }
        assert_eq!(driver.calls().len(), 2);
    }

    #[test]
    fn test_detail_by_object_and_by_id() {
        let driver = RecordingDriver::new();
        let original = driver.balancer(21, 80);

        let by_object = assert_ok!(driver.balancer_detail(BalancerLookup::from(&original)));
        assert_eq!(by_object.id(), Some("21"));

        let by_id = assert_ok!(driver.balancer_detail(BalancerLookup::id("21")));
        assert_eq!(by_id.id(), by_object.id());
        assert_eq!(by_id.name(), "detailed");
    }

    #[test]
    fn test_snapshot_is_not_live() {
        let driver = RecordingDriver::new();
        let balancer = driver.balancer(1, 80);
        let before = balancer.state().to_string();

        assert_ok!(driver.destroy_balancer(&balancer));
        assert_eq!(balancer.state(), before);
    }
}
