#![no_main]

use libfuzzer_sys::fuzz_target;
use pxf_cluster::{
    descriptor, synthesize, validate, EnvVar, MapEnvironment, Operation, SynthesisOptions,
};

const VARS: [EnvVar; 7] = [
    EnvVar::GpHome,
    EnvVar::PxfHome,
    EnvVar::PxfBase,
    EnvVar::JavaHome,
    EnvVar::PxfConf,
    EnvVar::PxfProtocol,
    EnvVar::PxfPort,
];

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // one value per line, in VARS order; missing lines stay unset
    let mut env = MapEnvironment::new();
    for (var, value) in VARS.iter().zip(text.split('\n')) {
        env.set(*var, value);
    }

    for op in Operation::ALL {
        let d = descriptor(op);
        let Ok(bound) = validate(d, &env) else {
            continue;
        };
        if let Ok(command) = synthesize(d, &bound, &SynthesisOptions::default()) {
            let _ = command.for_host("fuzz-host");
        }
    }
});
