pub(super) const BUILTIN_CATALOG_IDS: [&str; 3] = ["kubernetes", "knative", "vrm"];

pub(super) enum TemplateBody {
    Text,
    Flow(&'static str),
    Timing(&'static [&'static str]),
}

pub(super) struct SlideTemplate {
    pub(super) id: &'static str,
    pub(super) label: &'static str,
    pub(super) title: &'static str,
    pub(super) subtitle: &'static str,
    pub(super) lines: &'static [&'static str],
    pub(super) notes: &'static [&'static str],
    pub(super) body: TemplateBody,
}

pub(super) const SLIDES: &[SlideTemplate] = &[
    SlideTemplate {
        id: "title",
        label: "Title",
        title: "Keeping Processors Hot",
        subtitle: "Early signals for processor warming in Kubernetes and Knative",
        lines: &["A two-phase architecture for minimizing cold-start latency"],
        notes: &[
            "Frame the talk: the goal is to start warming before the workload lands.",
            "Arrow keys move between slides; space plays a flow diagram.",
        ],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "problem",
        label: "Problem",
        title: "The Problem",
        subtitle: "Why do we need early signals for processor warming?",
        lines: &[
            "Cold start latency: processors are idle when workloads arrive; initialization adds seconds.",
            "Late signals: by the time we know a workload is scheduled, the user is already waiting.",
            "Wasted lead time: time passes between pod creation and container start that could be used for pre-warming.",
        ],
        notes: &["Every millisecond between request and container start is potential warm-up time."],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "architecture",
        label: "Architecture",
        title: "Two-Phase Architecture",
        subtitle: "Hook into the request lifecycle at two critical points",
        lines: &[
            "Phase 1, early warning: pod identity is known, node assignment is not. Broadcast to all candidate nodes.",
            "Phase 2, targeted signal: pod and node are both known. Directed to the single selected node.",
        ],
        notes: &["Phase 1 trades precision for lead time; Phase 2 trades lead time for precision."],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "k8s-intro",
        label: "K8s Intro",
        title: "Kubernetes Flow",
        subtitle: "Generic Pod Creation Pipeline",
        lines: &[
            "10 steps from API request to running container.",
            "Hook 1: Mutating Admission Webhook",
            "Hook 2: Scheduler Reserve Plugin",
        ],
        notes: &[],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "k8s-flow",
        label: "K8s Flow",
        title: "Kubernetes Pod Creation",
        subtitle: "Step through the pipeline and watch the processor warm",
        lines: &[],
        notes: &[
            "Pause on the mutating webhook: this is the first point with pod identity.",
            "The Reserve plugin is the first point with a concrete node.",
        ],
        body: TemplateBody::Flow("kubernetes"),
    },
    SlideTemplate {
        id: "k8s-hook-mutating",
        label: "Mutating Webhook",
        title: "Hook 1: Mutating Admission Webhook",
        subtitle: "Phase 1 broadcast",
        lines: &[
            "Intercepts every Pod CREATE before it is persisted.",
            "This is the earliest point where we have the Pod's identity: name, namespace, labels, resource requests.",
            "The node is not yet chosen, so the signal goes to every candidate node.",
        ],
        notes: &[],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "k8s-hook-reserve",
        label: "Reserve Plugin",
        title: "Hook 2: Scheduler Reserve Plugin",
        subtitle: "Phase 2 targeted",
        lines: &[
            "Runs after filtering and scoring, once a node has been picked.",
            "Available: pod name, target node, node IP, all pod metadata.",
            "The signal is sent only to the selected node.",
        ],
        notes: &[],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "kn-intro",
        label: "Knative Intro",
        title: "Knative Flow",
        subtitle: "Scale-from-Zero Request Pipeline",
        lines: &[
            "12 steps from HTTP request to running response.",
            "Four hook points: ext_authz, ContextHandler, KPA scaler, Scheduler Reserve.",
        ],
        notes: &[],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "kn-flow",
        label: "Knative Flow",
        title: "Knative Scale From Zero",
        subtitle: "Three early hooks before the pod even exists",
        lines: &[],
        notes: &["Note how much earlier ext_authz fires than anything in plain Kubernetes."],
        body: TemplateBody::Flow("knative"),
    },
    SlideTemplate {
        id: "kn-hook-early",
        label: "Early Hooks",
        title: "Knative Early Hooks",
        subtitle: "Phase 1 from the ingress path",
        lines: &[
            "Envoy ext_authz: sees the request before the Activator; Revision ID from the Host header.",
            "ContextHandler: resolves the Revision object; replica count and container config are known.",
        ],
        notes: &[],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "kn-hook-late",
        label: "Late Hooks",
        title: "Knative Late Hooks",
        subtitle: "From scale decision to node placement",
        lines: &[
            "KPA Reconciler (late Phase 1): patches the Deployment from 0 to N; deployment identity is known.",
            "Scheduler Reserve (Phase 2): pod and exact node are known; targeted signal.",
        ],
        notes: &[],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "timing",
        label: "Timing",
        title: "Timing Comparison",
        subtitle: "When do hook points fire relative to the total request lifecycle?",
        lines: &[],
        notes: &["Read the bars left to right: hooks marked with a diamond."],
        body: TemplateBody::Timing(&["kubernetes", "knative"]),
    },
    SlideTemplate {
        id: "signal-delivery",
        label: "Signals",
        title: "Signal Delivery Architecture",
        subtitle: "How warming signals reach processors at each phase",
        lines: &[
            "Phase 1: all candidate nodes receive the warming signal and begin pre-loading before the node is determined. Some effort is wasted on non-selected nodes.",
            "Phase 2: only the selected node receives the targeted signal and completes its warm-up with exact workload information.",
        ],
        notes: &[],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "hardware-bridge",
        label: "Hardware",
        title: "But What Keeps the Processor Physically Hot?",
        subtitle: "From software warming signals to the hardware that delivers power",
        lines: &[
            "Software layer: admission webhooks, scheduler plugins, and Knative hooks trigger early warming.",
            "Hardware layer: the VRM, a multi-phase buck converter from 12V to core voltage.",
            "The software signals decide when to warm up; the VRM decides how power reaches the processor.",
        ],
        notes: &[],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "vrm-intro",
        label: "VRM Intro",
        title: "Voltage Regulator Module",
        subtitle: "12V in, 0.7-1.1V out, up to 1000A continuous",
        lines: &[
            "Feed-forward: 12V input, SVID, PWM controller, gate driver, MOSFETs, inductor, CPU load.",
            "Feedback: capacitors, feedback divider, error amplifier, back to the controller.",
        ],
        notes: &[],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "vrm-flow",
        label: "VRM Flow",
        title: "VRM Power Path",
        subtitle: "Follow power from the board to the die and back through the loop",
        lines: &[],
        notes: &["SVID is where a warming hint becomes an electrical request."],
        body: TemplateBody::Flow("vrm"),
    },
    SlideTemplate {
        id: "vrm-hook-svid",
        label: "SVID Hook",
        title: "Hook: Serial Voltage ID",
        subtitle: "The processor tells the VRM what it needs",
        lines: &[
            "Requested Vcore: target output voltage (e.g. 0.75V).",
            "P-state: performance state, which sets clock and voltage.",
            "Turbo mode: whether turbo boost is active.",
            "Current limit: max current the CPU will draw (TDC/PL1).",
        ],
        notes: &[],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "vrm-hook-load",
        label: "Load Hook",
        title: "Hook: CPU Load Step",
        subtitle: "What the regulator must absorb",
        lines: &[
            "Vout 0.7-1.1V, I_DC 1000A, TDC power 700W, TDP peak 1750W.",
            "The error amplifier monitors Vout through the feedback divider and restores regulation within 1-10us.",
            "Multi-phase interleaving reduces ripple by a factor of N phases.",
        ],
        notes: &[],
        body: TemplateBody::Text,
    },
    SlideTemplate {
        id: "summary",
        label: "Summary",
        title: "Summary",
        subtitle: "Key takeaways for keeping processors hot",
        lines: &[
            "Implement a Mutating Admission Webhook that emits Phase 1 signals with pod identity.",
            "Build a Scheduler Reserve plugin that sends Phase 2 targeted signals with exact node information.",
            "Hook ext_authz or ContextHandler to start warming before Knative autoscaling.",
            "Monitor lead time gains between the Phase 1 signal and container start.",
        ],
        notes: &["Phase 1 gives broad early warning. Phase 2 gives precise targeting."],
        body: TemplateBody::Text,
    },
];
