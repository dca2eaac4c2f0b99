//! The fixed candidate list every query filters over.
//!
//! Article analysis is mocked: whatever file is uploaded, these twenty
//! journals come back in this order.

use crate::models::journals::{AccessType, JournalCandidate, Quartile};

struct CandidateSeed {
    id: &'static str,
    journal_name: &'static str,
    issn: &'static str,
    eissn: &'static str,
    publisher: &'static str,
    quartile: Quartile,
    access_type: AccessType,
    submission_fee: u32,
    matching_analysis: &'static [&'static str],
    score: u8,
    apc: &'static str,
    profile_url: &'static str,
    aims_scopes: &'static str,
    preferences: &'static str,
}

impl CandidateSeed {
    fn to_candidate(&self) -> JournalCandidate {
        JournalCandidate {
            id: self.id.to_string(),
            journal_name: self.journal_name.to_string(),
            issn: self.issn.to_string(),
            eissn: self.eissn.to_string(),
            publisher: self.publisher.to_string(),
            quartile: self.quartile,
            access_type: self.access_type,
            submission_fee: self.submission_fee,
            matching_analysis: self
                .matching_analysis
                .iter()
                .map(|s| s.to_string())
                .collect(),
            score: self.score,
            apc: self.apc.to_string(),
            profile_url: self.profile_url.to_string(),
            aims_scopes: self.aims_scopes.to_string(),
            preferences: self.preferences.to_string(),
        }
    }
}

pub fn all_candidates() -> Vec<JournalCandidate> {
    SEEDS.iter().map(CandidateSeed::to_candidate).collect()
}

const SEEDS: &[CandidateSeed] = &[
    CandidateSeed {
        id: "1",
        journal_name: "Nature Communications",
        issn: "2041-1723",
        eissn: "2041-1723",
        publisher: "Springer Nature",
        quartile: Quartile::Q1,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Strong alignment with interdisciplinary research focus",
            "High citation impact in related subject areas",
            "Open access model matches submission preferences",
            "Recent publications show similar methodology approaches",
        ],
        score: 95,
        apc: "$5,790",
        profile_url: "https://www.nature.com/ncomms/",
        aims_scopes: "Nature Communications is an open access journal that publishes high-quality research from all areas of the natural sciences.",
        preferences: "Original research articles, review articles with broad scientific interest",
    },
    CandidateSeed {
        id: "2",
        journal_name: "Scientific Reports",
        issn: "2045-2322",
        eissn: "2045-2322",
        publisher: "Springer Nature",
        quartile: Quartile::Q1,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Broad scope covers multiple scientific disciplines",
            "Fast peer review process suitable for timely research",
            "High acceptance rate for methodologically sound research",
            "Strong visibility and indexing coverage",
        ],
        score: 88,
        apc: "$2,490",
        profile_url: "https://www.nature.com/srep/",
        aims_scopes: "Scientific Reports publishes original research in all areas of natural sciences, psychology, medicine and engineering.",
        preferences: "Primary research papers, technical reports with reproducible results",
    },
    CandidateSeed {
        id: "3",
        journal_name: "PLOS ONE",
        issn: "1932-6203",
        eissn: "1932-6203",
        publisher: "Public Library of Science",
        quartile: Quartile::Q2,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Multidisciplinary scope aligns with research topic",
            "Open access ensures wide dissemination",
            "Focuses on technical soundness over perceived impact",
            "Large readership in target research community",
        ],
        score: 82,
        apc: "$1,931",
        profile_url: "https://journals.plos.org/plosone/",
        aims_scopes: "PLOS ONE features reports of original research from all disciplines within science and medicine.",
        preferences: "Research articles with sound methodology, negative results also considered",
    },
    CandidateSeed {
        id: "4",
        journal_name: "Frontiers in Medicine",
        issn: "2296-858X",
        eissn: "2296-858X",
        publisher: "Frontiers Media SA",
        quartile: Quartile::Q2,
        access_type: AccessType::Hybrid,
        submission_fee: 0,
        matching_analysis: &[
            "Specialized focus matches research domain",
            "Collaborative review process enhances quality",
            "Strong social media presence for article promotion",
            "Growing impact factor trajectory",
        ],
        score: 78,
        apc: "$2,950",
        profile_url: "https://www.frontiersin.org/journals/medicine",
        aims_scopes: "Frontiers in Medicine publishes rigorously peer-reviewed research across a wide spectrum of medical specialties.",
        preferences: "Original research, clinical trials, systematic reviews, meta-analyses",
    },
    CandidateSeed {
        id: "5",
        journal_name: "BMC Research Notes",
        issn: "1756-0500",
        eissn: "1756-0500",
        publisher: "BioMed Central",
        quartile: Quartile::Q3,
        access_type: AccessType::Open,
        submission_fee: 50,
        matching_analysis: &[
            "Suitable for preliminary findings and smaller studies",
            "Quick turnaround time for publication",
            "Lower APC makes it cost-effective",
            "Part of established BMC journal family",
        ],
        score: 71,
        apc: "$1,290",
        profile_url: "https://bmcresnotes.biomedcentral.com/",
        aims_scopes: "BMC Research Notes publishes scientifically sound research across all fields of biology and medicine.",
        preferences: "Short reports, data notes, case reports, methodology articles",
    },
    CandidateSeed {
        id: "6",
        journal_name: "PeerJ",
        issn: "2167-8359",
        eissn: "2167-8359",
        publisher: "PeerJ Inc.",
        quartile: Quartile::Q2,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Innovative open peer review aligns with transparency goals",
            "Lifetime membership option for frequent publishers",
            "Strong data sharing policies complement research approach",
            "Active researcher community engagement",
        ],
        score: 75,
        apc: "$1,395",
        profile_url: "https://peerj.com/",
        aims_scopes: "PeerJ is an open access peer-reviewed scientific journal covering research in biological and medical sciences.",
        preferences: "Research articles, literature reviews, replication studies encouraged",
    },
    CandidateSeed {
        id: "7",
        journal_name: "Journal of Clinical Medicine",
        issn: "2077-0383",
        eissn: "2077-0383",
        publisher: "MDPI AG",
        quartile: Quartile::Q1,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Clinical focus matches applied research orientation",
            "Rapid publication process for time-sensitive research",
            "Strong indexing in medical databases",
            "Special issue opportunities for themed collections",
        ],
        score: 85,
        apc: "$2,600",
        profile_url: "https://www.mdpi.com/journal/jcm",
        aims_scopes: "Journal of Clinical Medicine is a peer-reviewed open access journal focused on clinical research and practice.",
        preferences: "Clinical studies, observational research, evidence-based medicine",
    },
    CandidateSeed {
        id: "8",
        journal_name: "Applied Sciences",
        issn: "2076-3417",
        eissn: "2076-3417",
        publisher: "MDPI AG",
        quartile: Quartile::Q2,
        access_type: AccessType::Hybrid,
        submission_fee: 0,
        matching_analysis: &[
            "Broad engineering and technology scope",
            "Supports interdisciplinary research approaches",
            "Regular special issues in emerging topics",
            "International editorial board representation",
        ],
        score: 72,
        apc: "$2,400",
        profile_url: "https://www.mdpi.com/journal/applsci",
        aims_scopes: "Applied Sciences covers all aspects of applied natural sciences and technology.",
        preferences: "Applied research, technology development, engineering applications",
    },
    CandidateSeed {
        id: "9",
        journal_name: "Wellcome Open Research",
        issn: "2398-502X",
        eissn: "2398-502X",
        publisher: "F1000 Research Ltd",
        quartile: Quartile::Q1,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Funder-backed platform suits grant-funded biomedical work",
            "Post-publication open peer review offers rapid dissemination",
            "No charge to authors with eligible funding",
            "Transparent review history supports reproducibility claims",
        ],
        score: 89,
        apc: "$0",
        profile_url: "https://wellcomeopenresearch.org/",
        aims_scopes: "Wellcome Open Research publishes research outputs from Wellcome-funded researchers across biomedical science and medical humanities.",
        preferences: "Research articles, data notes, method articles, study protocols",
    },
    CandidateSeed {
        id: "10",
        journal_name: "Frontiers in Psychology",
        issn: "1664-1078",
        eissn: "1664-1078",
        publisher: "Frontiers Media SA",
        quartile: Quartile::Q1,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Behavioural methodology aligns with study design",
            "Large specialty sections cover the research area",
            "High download counts in related topics",
            "Collaborative review encourages constructive revisions",
        ],
        score: 86,
        apc: "$3,295",
        profile_url: "https://www.frontiersin.org/journals/psychology",
        aims_scopes: "Frontiers in Psychology publishes research across all areas of psychological science, from clinical to cognitive research.",
        preferences: "Original research, reviews, hypothesis and theory articles",
    },
    CandidateSeed {
        id: "11",
        journal_name: "Sustainability",
        issn: "2071-1050",
        eissn: "2071-1050",
        publisher: "MDPI AG",
        quartile: Quartile::Q1,
        access_type: AccessType::Hybrid,
        submission_fee: 0,
        matching_analysis: &[
            "Environmental and social sustainability themes match topic",
            "Frequent special issues on policy and development",
            "Short median time to first decision",
            "Wide international authorship base",
        ],
        score: 84,
        apc: "$2,600",
        profile_url: "https://www.mdpi.com/journal/sustainability",
        aims_scopes: "Sustainability is a cross-disciplinary journal of environmental, cultural, economic and social sustainability of human beings.",
        preferences: "Empirical studies, policy analyses, review articles",
    },
    CandidateSeed {
        id: "12",
        journal_name: "Heliyon",
        issn: "2405-8440",
        eissn: "2405-8440",
        publisher: "Cell Press",
        quartile: Quartile::Q2,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "All-discipline scope accepts interdisciplinary submissions",
            "Section editors cover the methodological approach",
            "Moderate APC relative to comparable titles",
            "Indexed in major citation databases",
        ],
        score: 79,
        apc: "$1,390",
        profile_url: "https://www.cell.com/heliyon/home",
        aims_scopes: "Heliyon publishes high-quality research across all disciplines in the physical, applied, life, social and medical sciences.",
        preferences: "Research articles, reviews, short communications",
    },
    CandidateSeed {
        id: "13",
        journal_name: "F1000Research",
        issn: "2046-1402",
        eissn: "2046-1402",
        publisher: "F1000 Research Ltd",
        quartile: Quartile::Q2,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Immediate publication followed by open peer review",
            "Accepts null and negative findings",
            "Mandatory data availability strengthens transparency",
            "Versioned articles allow iterative updates",
        ],
        score: 74,
        apc: "$1,350",
        profile_url: "https://f1000research.com/",
        aims_scopes: "F1000Research is an open research publishing platform for life scientists offering rapid publication and transparent peer review.",
        preferences: "Research articles, software tools, data notes, negative results",
    },
    CandidateSeed {
        id: "14",
        journal_name: "Cogent Engineering",
        issn: "2331-1916",
        eissn: "2331-1916",
        publisher: "Taylor & Francis",
        quartile: Quartile::Q2,
        access_type: AccessType::Hybrid,
        submission_fee: 0,
        matching_analysis: &[
            "Engineering scope fits the applied methodology",
            "Pay-what-you-can policy lowers cost barriers",
            "Broad international readership",
            "Steady citation growth in engineering subfields",
        ],
        score: 72,
        apc: "$1,150",
        profile_url: "https://www.tandfonline.com/journals/oaen20",
        aims_scopes: "Cogent Engineering publishes research across all areas of engineering, from civil and mechanical to electrical and computer engineering.",
        preferences: "Original research, case studies, review articles",
    },
    CandidateSeed {
        id: "15",
        journal_name: "SAGE Open",
        issn: "2158-2440",
        eissn: "2158-2440",
        publisher: "SAGE Publications",
        quartile: Quartile::Q2,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Social science and humanities scope suits the topic",
            "Low APC for a broad-scope journal",
            "Peer review focused on technical rigour",
            "Good visibility within SAGE platform",
        ],
        score: 70,
        apc: "$995",
        profile_url: "https://journals.sagepub.com/home/sgo",
        aims_scopes: "SAGE Open publishes peer-reviewed original research and review articles in the social and behavioural sciences and humanities.",
        preferences: "Original research, review articles, methodological papers",
    },
    CandidateSeed {
        id: "16",
        journal_name: "Data in Brief",
        issn: "2352-3409",
        eissn: "2352-3409",
        publisher: "Elsevier",
        quartile: Quartile::Q3,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Dataset description fits supporting data from the article",
            "Low APC for data publications",
            "Links to companion research articles",
            "Improves discoverability of underlying data",
        ],
        score: 68,
        apc: "$590",
        profile_url: "https://www.sciencedirect.com/journal/data-in-brief",
        aims_scopes: "Data in Brief publishes short articles that describe research data, making data citable and reusable.",
        preferences: "Data articles, dataset descriptions, co-submissions with research papers",
    },
    CandidateSeed {
        id: "17",
        journal_name: "Journal of Open Source Software",
        issn: "2475-9066",
        eissn: "2475-9066",
        publisher: "Open Journals",
        quartile: Quartile::Q2,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Software contribution suits a software paper format",
            "No publication charge",
            "Review conducted openly on GitHub",
            "Fast turnaround for research software",
        ],
        score: 67,
        apc: "$0",
        profile_url: "https://joss.theoj.org/",
        aims_scopes: "The Journal of Open Source Software publishes short papers describing research software with an open source license.",
        preferences: "Software papers with public repositories and documentation",
    },
    CandidateSeed {
        id: "18",
        journal_name: "Cureus",
        issn: "2168-8184",
        eissn: "2168-8184",
        publisher: "Springer Nature",
        quartile: Quartile::Q3,
        access_type: AccessType::Open,
        submission_fee: 0,
        matching_analysis: &[
            "Clinical case material fits the journal format",
            "No fee for standard publication",
            "Rapid editorial process",
            "Strong reach among clinicians",
        ],
        score: 65,
        apc: "$0",
        profile_url: "https://www.cureus.com/",
        aims_scopes: "Cureus is a general medical journal publishing original research, case reports and reviews across all medical specialties.",
        preferences: "Case reports, original articles, technical reports",
    },
    CandidateSeed {
        id: "19",
        journal_name: "Open Medicine",
        issn: "2391-5463",
        eissn: "2391-5463",
        publisher: "De Gruyter",
        quartile: Quartile::Q3,
        access_type: AccessType::Open,
        submission_fee: 100,
        matching_analysis: &[
            "General medicine scope covers the clinical topic",
            "Moderate APC with waiver options",
            "Continuous publication model",
            "Regional readership in Central Europe",
        ],
        score: 64,
        apc: "$1,100",
        profile_url: "https://www.degruyter.com/journal/key/med/html",
        aims_scopes: "Open Medicine publishes research in all areas of medicine, including clinical and experimental studies.",
        preferences: "Research articles, reviews, case reports",
    },
    CandidateSeed {
        id: "20",
        journal_name: "European Science Editing",
        issn: "0258-3127",
        eissn: "2518-3354",
        publisher: "European Association of Science Editors",
        quartile: Quartile::Q4,
        access_type: AccessType::Closed,
        submission_fee: 0,
        matching_analysis: &[
            "Publication practice focus matches methodological commentary",
            "Small but targeted editorial readership",
            "Low APC",
            "Relevant for research integrity discussions",
        ],
        score: 58,
        apc: "$450",
        profile_url: "https://ese.arphahub.com/",
        aims_scopes: "European Science Editing publishes articles on all aspects of scientific editing, publishing and research integrity.",
        preferences: "Original articles, reviews, viewpoints, essays",
    },
];
