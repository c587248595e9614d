//! Contracts: the exact command lines each operation produces.

use pxf_cluster::{descriptor, synthesize, validate, Operation, ReloadTarget, SynthesisOptions};

use crate::common::full_env;

fn command_for(op: Operation, options: &SynthesisOptions, host: &str) -> String {
    let d = descriptor(op);
    let bound = validate(d, &full_env()).unwrap();
    synthesize(d, &bound, options).unwrap().for_host(host)
}

fn default_command(op: Operation) -> String {
    command_for(op, &SynthesisOptions::default(), "sdw1")
}

#[test]
fn contract_generic_commands() {
    insta::assert_snapshot!(default_command(Operation::Init), @"GPHOME=/usr/local/greenplum-db JAVA_HOME=/usr/lib/jvm/jre /usr/local/pxf/bin/pxf init");
    insta::assert_snapshot!(default_command(Operation::Start), @"PXF_BASE=/home/gpadmin/pxf /usr/local/pxf/bin/pxf start");
    insta::assert_snapshot!(default_command(Operation::Stop), @"PXF_BASE=/home/gpadmin/pxf /usr/local/pxf/bin/pxf stop");
    insta::assert_snapshot!(default_command(Operation::Status), @"PXF_BASE=/home/gpadmin/pxf /usr/local/pxf/bin/pxf status");
    insta::assert_snapshot!(default_command(Operation::Reset), @"/usr/local/pxf/bin/pxf reset --force");
    insta::assert_snapshot!(default_command(Operation::Register), @"GPHOME=/usr/local/greenplum-db /usr/local/pxf/bin/pxf register");
    insta::assert_snapshot!(default_command(Operation::Restart), @"PXF_BASE=/home/gpadmin/pxf /usr/local/pxf/bin/pxf restart");
    insta::assert_snapshot!(default_command(Operation::Prepare), @"PXF_BASE=/home/gpadmin/pxf /usr/local/pxf/bin/pxf prepare");
    insta::assert_snapshot!(default_command(Operation::Migrate), @"PXF_CONF=/home/gpadmin/pxf-conf PXF_BASE=/home/gpadmin/pxf /usr/local/pxf/bin/pxf migrate");
}

#[test]
fn contract_sync_command_targets_each_host() {
    insta::assert_snapshot!(
        command_for(Operation::Sync, &SynthesisOptions::default(), "sdw1"),
        @"rsync -az -e 'ssh -o StrictHostKeyChecking=no' '/home/gpadmin/pxf/conf' '/home/gpadmin/pxf/lib' '/home/gpadmin/pxf/servers' 'sdw1:/home/gpadmin/pxf'"
    );

    let options = SynthesisOptions {
        delete_on_sync: true,
        ..Default::default()
    };
    insta::assert_snapshot!(
        command_for(Operation::Sync, &options, "scdw"),
        @"rsync -az --delete -e 'ssh -o StrictHostKeyChecking=no' '/home/gpadmin/pxf/conf' '/home/gpadmin/pxf/lib' '/home/gpadmin/pxf/servers' 'scdw:/home/gpadmin/pxf'"
    );
}

#[test]
fn contract_reload_command_posts_profile_and_server() {
    insta::assert_snapshot!(
        default_command(Operation::Reload),
        @r#"curl --silent --fail --show-error --request POST http://localhost:5888/pxf/reload --header "Content-Type: application/json" --data '{"profile":"","server":""}'"#
    );

    let options = SynthesisOptions {
        reload: ReloadTarget {
            profile: "jdbc".to_string(),
            server: "pg".to_string(),
        },
        ..Default::default()
    };
    insta::assert_snapshot!(
        command_for(Operation::Reload, &options, "sdw1"),
        @r#"curl --silent --fail --show-error --request POST http://localhost:5888/pxf/reload --header "Content-Type: application/json" --data '{"profile":"jdbc","server":"pg"}'"#
    );
}

#[test]
fn contract_reload_over_https_carries_client_certificates() {
    let d = descriptor(Operation::Reload);
    let env = full_env()
        .with(pxf_cluster::EnvVar::PxfProtocol, "https")
        .with(pxf_cluster::EnvVar::PxfPort, "5889");
    let bound = validate(d, &env).unwrap();
    let command = synthesize(d, &bound, &SynthesisOptions::default())
        .unwrap()
        .for_host("cdw");

    insta::assert_snapshot!(
        command,
        @r#"curl -k --cacert ${PXF_SSL_CACERT} --cert ${PXF_SSL_CERT} --key ${PXF_SSL_KEY} --silent --fail --show-error --request POST https://localhost:5889/pxf/reload --header "Content-Type: application/json" --data '{"profile":"","server":""}'"#
    );
}
