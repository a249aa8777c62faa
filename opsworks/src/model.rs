/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::{string_enum, structure};

string_enum! {
    pub enum LayerType {
        AwsFlowRuby => "aws-flow-ruby",
        Custom => "custom",
        DbMaster => "db-master",
        EcsCluster => "ecs-cluster",
        JavaApp => "java-app",
        Lb => "lb",
        Memcached => "memcached",
        MonitoringMaster => "monitoring-master",
        NodejsApp => "nodejs-app",
        PhpApp => "php-app",
        RailsApp => "rails-app",
        Web => "web",
    }
}

/// <p>Describes an Amazon EBS volume configuration.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct VolumeConfiguration {
    /// <p>The volume mount point. For example "/dev/sdh".</p>
    pub mount_point: std::option::Option<std::string::String>,
    /// <p>The volume <a href="http://en.wikipedia.org/wiki/Standard_RAID_levels">RAID level</a>.</p>
    pub raid_level: std::option::Option<i32>,
    /// <p>The number of disks in the volume.</p>
    pub number_of_disks: std::option::Option<i32>,
    /// <p>The volume size.</p>
    pub size: std::option::Option<i32>,
    /// <p>The volume type: <code>standard</code>, <code>io1</code>, <code>gp2</code>,
    /// <code>st1</code> or <code>sc1</code>.</p>
    pub volume_type: std::option::Option<std::string::String>,
    /// <p>For PIOPS volumes, the IOPS per disk.</p>
    pub iops: std::option::Option<i32>,
}

structure!(VolumeConfiguration {
    mount_point: "MountPoint",
    raid_level: "RaidLevel",
    number_of_disks: "NumberOfDisks",
    size: "Size",
    volume_type: "VolumeType",
    iops: "Iops",
});

/// See [`VolumeConfiguration`](crate::model::VolumeConfiguration)
pub mod volume_configuration {
    /// A builder for [`VolumeConfiguration`](crate::model::VolumeConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        mount_point: std::option::Option<std::string::String>,
        raid_level: std::option::Option<i32>,
        number_of_disks: std::option::Option<i32>,
        size: std::option::Option<i32>,
        volume_type: std::option::Option<std::string::String>,
        iops: std::option::Option<i32>,
    }
    impl Builder {
        pub fn mount_point(mut self, inp: impl Into<std::string::String>) -> Self {
            self.mount_point = Some(inp.into());
            self
        }
        pub fn raid_level(mut self, inp: i32) -> Self {
            self.raid_level = Some(inp);
            self
        }
        pub fn number_of_disks(mut self, inp: i32) -> Self {
            self.number_of_disks = Some(inp);
            self
        }
        pub fn size(mut self, inp: i32) -> Self {
            self.size = Some(inp);
            self
        }
        pub fn volume_type(mut self, inp: impl Into<std::string::String>) -> Self {
            self.volume_type = Some(inp.into());
            self
        }
        pub fn iops(mut self, inp: i32) -> Self {
            self.iops = Some(inp);
            self
        }
        /// Consumes the builder and constructs a [`VolumeConfiguration`](crate::model::VolumeConfiguration)
        pub fn build(self) -> crate::model::VolumeConfiguration {
            crate::model::VolumeConfiguration {
                mount_point: self.mount_point,
                raid_level: self.raid_level,
                number_of_disks: self.number_of_disks,
                size: self.size,
                volume_type: self.volume_type,
                iops: self.iops,
            }
        }
    }
}
impl VolumeConfiguration {
    /// Creates a new builder-style object to manufacture [`VolumeConfiguration`](crate::model::VolumeConfiguration)
    pub fn builder() -> crate::model::volume_configuration::Builder {
        crate::model::volume_configuration::Builder::default()
    }
}

/// <p>AWS OpsWorks Stacks supports five lifecycle events: <b>setup</b>, <b>configuration</b>,
/// <b>deploy</b>, <b>undeploy</b>, and <b>shutdown</b>. For each layer, AWS OpsWorks Stacks runs
/// a set of standard recipes for each event. You can also provide custom recipes for any or all
/// layers and events.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct Recipes {
    /// <p>An array of custom recipe names to be run following a <code>setup</code> event.</p>
    pub setup: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>An array of custom recipe names to be run following a <code>configure</code> event.</p>
    pub configure: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>An array of custom recipe names to be run following a <code>deploy</code> event.</p>
    pub deploy: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>An array of custom recipe names to be run following a <code>undeploy</code> event.</p>
    pub undeploy: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>An array of custom recipe names to be run following a <code>shutdown</code> event.</p>
    pub shutdown: std::option::Option<std::vec::Vec<std::string::String>>,
}

structure!(Recipes {
    setup: "Setup",
    configure: "Configure",
    deploy: "Deploy",
    undeploy: "Undeploy",
    shutdown: "Shutdown",
});

/// See [`Recipes`](crate::model::Recipes)
pub mod recipes {
    /// A builder for [`Recipes`](crate::model::Recipes)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        setup: std::option::Option<std::vec::Vec<std::string::String>>,
        configure: std::option::Option<std::vec::Vec<std::string::String>>,
        deploy: std::option::Option<std::vec::Vec<std::string::String>>,
        undeploy: std::option::Option<std::vec::Vec<std::string::String>>,
        shutdown: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn setup(mut self, inp: impl Into<std::string::String>) -> Self {
            self.setup.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_setup(mut self, inp: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.setup = inp;
            self
        }
        pub fn configure(mut self, inp: impl Into<std::string::String>) -> Self {
            self.configure.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_configure(mut self, inp: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.configure = inp;
            self
        }
        pub fn deploy(mut self, inp: impl Into<std::string::String>) -> Self {
            self.deploy.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_deploy(mut self, inp: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.deploy = inp;
            self
        }
        pub fn undeploy(mut self, inp: impl Into<std::string::String>) -> Self {
            self.undeploy.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_undeploy(mut self, inp: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.undeploy = inp;
            self
        }
        pub fn shutdown(mut self, inp: impl Into<std::string::String>) -> Self {
            self.shutdown.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_shutdown(mut self, inp: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.shutdown = inp;
            self
        }
        /// Consumes the builder and constructs a [`Recipes`](crate::model::Recipes)
        pub fn build(self) -> crate::model::Recipes {
            crate::model::Recipes {
                setup: self.setup,
                configure: self.configure,
                deploy: self.deploy,
                undeploy: self.undeploy,
                shutdown: self.shutdown,
            }
        }
    }
}
impl Recipes {
    /// Creates a new builder-style object to manufacture [`Recipes`](crate::model::Recipes)
    pub fn builder() -> crate::model::recipes::Builder {
        crate::model::recipes::Builder::default()
    }
}

/// <p>The Shutdown event configuration.</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct ShutdownEventConfiguration {
    /// <p>The time, in seconds, that AWS OpsWorks Stacks will wait after triggering a Shutdown
    /// event before shutting down an instance.</p>
    pub execution_timeout: std::option::Option<i32>,
    /// <p>Whether to enable Elastic Load Balancing connection draining.</p>
    pub delay_until_elb_connections_drained: std::option::Option<bool>,
}

structure!(ShutdownEventConfiguration {
    execution_timeout: "ExecutionTimeout",
    delay_until_elb_connections_drained: "DelayUntilElbConnectionsDrained",
});

/// See [`ShutdownEventConfiguration`](crate::model::ShutdownEventConfiguration)
pub mod shutdown_event_configuration {
    /// A builder for [`ShutdownEventConfiguration`](crate::model::ShutdownEventConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        execution_timeout: std::option::Option<i32>,
        delay_until_elb_connections_drained: std::option::Option<bool>,
    }
    impl Builder {
        pub fn execution_timeout(mut self, inp: i32) -> Self {
            self.execution_timeout = Some(inp);
            self
        }
        pub fn delay_until_elb_connections_drained(mut self, inp: bool) -> Self {
            self.delay_until_elb_connections_drained = Some(inp);
            self
        }
        /// Consumes the builder and constructs a [`ShutdownEventConfiguration`](crate::model::ShutdownEventConfiguration)
        pub fn build(self) -> crate::model::ShutdownEventConfiguration {
            crate::model::ShutdownEventConfiguration {
                execution_timeout: self.execution_timeout,
                delay_until_elb_connections_drained: self.delay_until_elb_connections_drained,
            }
        }
    }
}
impl ShutdownEventConfiguration {
    /// Creates a new builder-style object to manufacture [`ShutdownEventConfiguration`](crate::model::ShutdownEventConfiguration)
    pub fn builder() -> crate::model::shutdown_event_configuration::Builder {
        crate::model::shutdown_event_configuration::Builder::default()
    }
}

/// <p>Specifies the lifecycle event configuration</p>
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct LifecycleEventConfiguration {
    /// <p>A <code>ShutdownEventConfiguration</code> object that specifies the Shutdown event
    /// configuration.</p>
    pub shutdown: std::option::Option<crate::model::ShutdownEventConfiguration>,
}

structure!(LifecycleEventConfiguration {
    shutdown: "Shutdown",
});

/// See [`LifecycleEventConfiguration`](crate::model::LifecycleEventConfiguration)
pub mod lifecycle_event_configuration {
    /// A builder for [`LifecycleEventConfiguration`](crate::model::LifecycleEventConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        shutdown: std::option::Option<crate::model::ShutdownEventConfiguration>,
    }
    impl Builder {
        pub fn shutdown(mut self, inp: crate::model::ShutdownEventConfiguration) -> Self {
            self.shutdown = Some(inp);
            self
        }
        /// Consumes the builder and constructs a [`LifecycleEventConfiguration`](crate::model::LifecycleEventConfiguration)
        pub fn build(self) -> crate::model::LifecycleEventConfiguration {
            crate::model::LifecycleEventConfiguration {
                shutdown: self.shutdown,
            }
        }
    }
}
impl LifecycleEventConfiguration {
    /// Creates a new builder-style object to manufacture [`LifecycleEventConfiguration`](crate::model::LifecycleEventConfiguration)
    pub fn builder() -> crate::model::lifecycle_event_configuration::Builder {
        crate::model::lifecycle_event_configuration::Builder::default()
    }
}
