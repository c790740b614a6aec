use std::path::PathBuf;

use pan2forti::emit::Channel;
use pan2forti::profile::TargetProfile;
use pan2forti::translate_config;
use pretty_assertions::assert_eq;
use xml_tree_core::{parse_file, XmlNode};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn running_config() -> XmlNode {
    parse_file(&fixture("panos-running-config.xml")).expect("fixture parse")
}

fn channel(channel: Channel) -> String {
    translate_config(&running_config(), &TargetProfile::default())
        .expect("translate")
        .channels
        .text(channel)
        .to_string()
}

#[test]
fn addresses_channel() {
    assert_eq!(
        channel(Channel::Addresses),
        "edit WebSrv\n\
         set subnet 10.0.0.0/24\n\
         set comment prod\n\
         next\n\
         edit Update_Server\n\
         set type fqdn\n\
         set fqdn updates.example.com\n\
         set comment ''\n\
         next\n"
    );
}

#[test]
fn address_groups_channel() {
    assert_eq!(
        channel(Channel::AddressGroups),
        "edit G\nappend member A\nnext\nedit G\nappend member B\nnext\n"
    );
}

#[test]
fn services_channel() {
    assert_eq!(
        channel(Channel::Services),
        "edit tcp-8080\n\
         set tcp-portrange 8080\n\
         next\n\
         edit dns_both\n\
         set tcp-portrange 53\n\
         next\n\
         edit dns_both\n\
         set udp-portrange 53\n\
         next\n\
         # service-group web-svcs member tcp-8080\n\
         # service-group web-svcs member service-https\n"
    );
}

#[test]
fn interfaces_channel() {
    assert_eq!(
        channel(Channel::Interfaces),
        "edit ethernet1/1_203.0.113.8_29\n\
         set vdom 'root'\n\
         set ip 203.0.113.10/29\n\
         set alias untrust\n\
         set allowaccess ping\n\
         set status up\n\
         next\n\
         edit ethernet1/2_192.168.10.0_24\n\
         set vdom 'root'\n\
         set ip 192.168.10.1/24\n\
         set alias trust\n\
         set allowaccess ping\n\
         set status up\n\
         next\n\
         edit ethernet1/2_192.168.20.0_24\n\
         set vdom 'root'\n\
         set ip 192.168.20.1/24\n\
         set alias trust\n\
         set allowaccess ping\n\
         set status up\n\
         next\n"
    );
}

#[test]
fn schedules_channel() {
    assert_eq!(
        channel(Channel::Schedules),
        "edit Business_Hours\n\
         set day monday tuesday\n\
         set start 08:00\n\
         set end 18:00\n\
         next\n\
         edit MonOnly\n\
         next\n\
         edit Maintenance\n\
         set schedule-type recurring\n\
         set day monday tuesday wednesday thursday friday saturday sunday\n\
         set start 00:00\n\
         set end 23:59\n\
         next\n"
    );
}

#[test]
fn policies_channel_skips_disabled_without_gaps() {
    assert_eq!(
        channel(Channel::Policies),
        "edit 1\n\
         set name AllowWeb-P1\n\
         set srcintf any\n\
         set dstintf any\n\
         set srcaddr all\n\
         set dstaddr all\n\
         set schedule always\n\
         set service ALL\n\
         set action accept\n\
         set utm-status enable\n\
         set ssl-ssh-profile 'certificate-inspection'\n\
         set ips-sensor 'BM'\n\
         set logtraffic all\n\
         next\n\
         edit 2\n\
         set name Block_Bad-P2\n\
         set srcintf untrust\n\
         set dstintf trust\n\
         set srcaddr Bad_Hosts\n\
         set dstaddr all\n\
         set schedule Business_Hours\n\
         set service ALL\n\
         set action deny\n\
         set logtraffic all\n\
         next\n"
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let root = running_config();
    let profile = TargetProfile::default();
    let first = translate_config(&root, &profile).expect("first run");
    let second = translate_config(&root, &profile).expect("second run");

    for channel in Channel::ALL {
        assert_eq!(first.channels.text(channel), second.channels.text(channel));
    }
    assert_eq!(first, second);
}

#[test]
fn disabled_count_is_reported() {
    let translation =
        translate_config(&running_config(), &TargetProfile::default()).expect("translate");
    assert_eq!(translation.disabled_policies, 1);
}
