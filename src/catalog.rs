//! Bundled educational catalog: resources, quizzes, and organizational
//! assessments. Read-only configuration data, built once on first access.
//!
//! Entries without `content` are presented as external links; entries with
//! `content` carry inline reading material.

use crate::clock::unix_millis;
use crate::types::{
    Assessment, AssessmentQuestion, Quiz, QuizQuestion, Resource, ResourceType,
};
use once_cell::sync::Lazy;

pub fn resources() -> &'static [Resource] {
    &RESOURCES
}

pub fn quizzes() -> &'static [Quiz] {
    &QUIZZES
}

pub fn assessments() -> &'static [Assessment] {
    &ASSESSMENTS
}

pub fn find_resource(id: &str) -> Option<&'static Resource> {
    RESOURCES.iter().find(|r| r.id == id)
}

pub fn find_quiz(id: &str) -> Option<&'static Quiz> {
    QUIZZES.iter().find(|q| q.id == id)
}

pub fn find_assessment(id: &str) -> Option<&'static Assessment> {
    ASSESSMENTS.iter().find(|a| a.id == id)
}

fn days_ago(days: i64) -> i64 {
    unix_millis() - days * 24 * 60 * 60 * 1000
}

#[allow(clippy::too_many_arguments)]
fn resource(
    id: &str,
    title: &str,
    description: &str,
    resource_type: ResourceType,
    url: &str,
    image_url: &str,
    tags: &[&str],
    age_days: i64,
    read_time: Option<u32>,
    content: Option<&str>,
) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        resource_type,
        url: url.to_string(),
        image_url: Some(image_url.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: days_ago(age_days),
        read_time,
        content: content.map(|c| c.to_string()),
    }
}

fn quiz_question(
    id: &str,
    question: &str,
    options: [&str; 4],
    correct_answer: usize,
    explanation: &str,
) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
        explanation: explanation.to_string(),
    }
}

/// Assessment options are ordered best-to-worst; weights follow suit.
fn graded_question(id: &str, question: &str, options: [&str; 4]) -> AssessmentQuestion {
    AssessmentQuestion {
        id: id.to_string(),
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        weights: vec![3, 2, 1, 0],
    }
}

static RESOURCES: Lazy<Vec<Resource>> = Lazy::new(|| {
    vec![
        resource(
            "1",
            "Understanding Gender Bias in AI",
            "An exploration of how gender bias manifests in artificial intelligence systems and what we can do about it.",
            ResourceType::Article,
            "https://example.com/gender-bias-ai",
            "https://images.unsplash.com/photo-1620712943543-bcc4688e7485",
            &["AI", "bias", "gender equality", "technology"],
            7,
            Some(8),
            Some(
                "# Understanding Gender Bias in AI\n\n\
                 AI systems increasingly make decisions that affect daily life, from job applications to loan approvals, and they can perpetuate or amplify existing gender biases.\n\n\
                 ## How Bias Enters AI Systems\n\n\
                 1. **Biased Training Data**: models learn from historical data that encodes past discrimination.\n\
                 2. **Lack of Diversity in AI Development**: homogeneous teams overlook harms that diverse teams would catch.\n\
                 3. **Encoded Stereotypes**: language models reproduce the stereotypes present in their training text.\n\n\
                 ## What Helps\n\n\
                 Representative data, diverse teams, routine bias testing before and after deployment, transparency about how decisions are made, and ethical guidelines that name gender bias explicitly.",
            ),
        ),
        resource(
            "2",
            "Women in Tech: Breaking Barriers",
            "Stories of women who have overcome obstacles to succeed in the technology sector.",
            ResourceType::Story,
            "https://example.com/women-in-tech",
            "https://images.unsplash.com/photo-1573164713988-8665fc963095",
            &["women in tech", "career", "inspiration"],
            14,
            Some(12),
            Some(
                "# Women in Tech: Breaking Barriers\n\n\
                 From Ada Lovelace, who wrote the first algorithm intended for a machine, to Grace Hopper, who invented the first compiler, women have shaped computing from its beginning.\n\n\
                 Modern trailblazers continue that work: Reshma Saujani founded Girls Who Code, and Kimberly Bryant founded Black Girls Code, together reaching hundreds of thousands of girls.\n\n\
                 The barriers they faced remain familiar: unconscious bias about who \"looks like\" an engineer, a shortage of visible role models, and work cultures that push women out. Sharing these stories is part of dismantling those barriers.",
            ),
        ),
        resource(
            "3",
            "Creating Inclusive Digital Products",
            "A guide to designing and developing digital products that are accessible and inclusive for all genders.",
            ResourceType::Course,
            "https://www.coursera.org/learn/inclusive-design",
            "https://images.unsplash.com/photo-1581291518633-83b4ebd1d83e",
            &["design", "inclusion", "accessibility", "product development"],
            30,
            Some(120),
            None,
        ),
        resource(
            "4",
            "Gender Pay Gap in Technology",
            "An analysis of the current state of the gender pay gap in the technology industry and strategies for closing it.",
            ResourceType::Article,
            "https://example.com/pay-gap-tech",
            "https://images.unsplash.com/photo-1579621970563-ebec7560ff3e",
            &["pay gap", "equality", "workplace", "statistics"],
            45,
            Some(15),
            Some(
                "# The Gender Pay Gap in Technology\n\n\
                 Women in tech earn less than men in comparable roles, and the gap widens with seniority and compounds over a career.\n\n\
                 Closing it takes pay audits with published results, salary bands that remove negotiation penalties, and promotion criteria applied consistently across genders.",
            ),
        ),
        resource(
            "5",
            "Mentorship Programs for Women in STEM",
            "A directory of mentorship programs designed to support women pursuing careers in STEM fields.",
            ResourceType::Tool,
            "https://example.com/mentorship-women-stem",
            "https://images.unsplash.com/photo-1543269865-cbf427effbad",
            &["mentorship", "STEM", "career development", "networking"],
            60,
            None,
            None,
        ),
        resource(
            "6",
            "How a Tech Company Achieved Gender Parity",
            "A case study of a technology company that successfully achieved gender parity across all levels of the organization.",
            ResourceType::CaseStudy,
            "https://example.com/gender-parity-case-study",
            "https://images.unsplash.com/photo-1522202176988-66273c2fd55f",
            &["case study", "gender parity", "organizational change", "success story"],
            90,
            Some(20),
            Some(
                "# How a Tech Company Achieved Gender Parity\n\n\
                 Over five years the company moved from 18% to 50% women across all levels by treating parity as an engineering problem: measurable targets, public dashboards, and accountability in every manager's goals.\n\n\
                 Key interventions included blind resume screening, structured interviews, sponsorship (not just mentorship) for high-potential women, and pay-equity reviews every cycle.",
            ),
        ),
        resource(
            "7",
            "Digital Literacy for Women in Rural Communities",
            "Strategies and success stories for bridging the digital gender divide in rural and underserved areas.",
            ResourceType::Article,
            "https://example.com/digital-literacy-rural-women",
            "https://images.unsplash.com/photo-1573497620053-ea5300f94f21",
            &["digital literacy", "rural communities", "digital divide", "education"],
            120,
            Some(18),
            Some(
                "# Digital Literacy for Women in Rural Communities\n\n\
                 The digital divide is gendered: in many regions women are significantly less likely than men to have internet access or own a device. Community-run training centers, offline-first learning materials, and local women teaching women have proven the most durable interventions.",
            ),
        ),
        resource(
            "8",
            "Addressing Harassment in Online Gaming Communities",
            "Strategies for creating safer, more inclusive gaming spaces for women and marginalized groups.",
            ResourceType::Article,
            "https://example.com/gaming-harassment",
            "https://images.unsplash.com/photo-1542751371-adc38448a05e",
            &["gaming", "online harassment", "community management", "inclusion"],
            75,
            Some(14),
            Some(
                "# Addressing Harassment in Online Gaming Communities\n\n\
                 Harassment drives women out of gaming spaces at every level, from players to developers. Effective countermeasures combine clear codes of conduct, fast and consistent moderation, reporting tools that do not burden the target, and design choices that remove the anonymity-without-accountability that fuels abuse.",
            ),
        ),
        resource(
            "9",
            "Gender-Inclusive Language in Technical Documentation",
            "Best practices for creating technical content that is accessible and welcoming to all genders.",
            ResourceType::Article,
            "https://example.com/inclusive-documentation",
            "https://images.unsplash.com/photo-1555421689-3f034debb7a6",
            &["technical writing", "inclusive language", "documentation", "communication"],
            110,
            Some(10),
            Some(
                "# Gender-Inclusive Language in Technical Documentation\n\n\
                 Prefer gender-neutral terms and plural forms: \"users\" over \"the user ... he\", \"workforce\" over \"manpower\". Address the reader as \"you\" where the style guide allows, and audit examples and personas for stereotyped roles.",
            ),
        ),
        resource(
            "10",
            "Designing AI Systems with Gender Equality in Mind",
            "A comprehensive course on developing artificial intelligence that promotes rather than undermines gender equality.",
            ResourceType::Course,
            "https://www.edx.org/course/ai-ethics-gender-perspective",
            "https://images.unsplash.com/photo-1591453089816-0fbb971b454c",
            &["AI", "ethics", "design", "gender equality", "technology development"],
            85,
            Some(240),
            None,
        ),
        resource(
            "11",
            "The Economic Case for Gender Equality in Tech",
            "Research and data demonstrating how gender diversity drives innovation, productivity, and financial performance.",
            ResourceType::Article,
            "https://example.com/economic-case-gender-equality",
            "https://images.unsplash.com/photo-1590283603385-c5e24a6751e7",
            &["business", "economics", "diversity", "innovation"],
            100,
            Some(16),
            Some(
                "# The Economic Case for Gender Equality in Tech\n\n\
                 Gender-diverse companies consistently outperform homogeneous peers on innovation revenue and profitability. Diverse teams surface more failure modes, serve broader markets, and retain talent better. Equality is not only just; it is commercially rational.",
            ),
        ),
        resource(
            "12",
            "Coding Bootcamps for Women and Non-Binary Individuals",
            "A comprehensive guide to programs designed to help women and non-binary people enter the tech industry.",
            ResourceType::Course,
            "https://www.codecademy.com/learn/paths/web-development",
            "https://images.unsplash.com/photo-1522202176988-66273c2fd55f",
            &["education", "coding", "career transition", "bootcamps"],
            50,
            Some(180),
            None,
        ),
        resource(
            "13",
            "Gender-Inclusive UX/UI Design Principles",
            "How to create digital interfaces that work well for users across the gender spectrum.",
            ResourceType::Article,
            "https://example.com/inclusive-ux-design",
            "https://images.unsplash.com/photo-1586717791821-3f44a563fa4c",
            &["UX", "UI", "design", "inclusion", "accessibility"],
            40,
            Some(12),
            Some(
                "# Gender-Inclusive UX/UI Design Principles\n\n\
                 Collect gender data only when you need it, and offer inclusive options when you do. Avoid gendered defaults in avatars, colors, and copy. Test with users across the gender spectrum, not just a convenient sample.",
            ),
        ),
        resource(
            "14",
            "Negotiation Strategies for Women in Tech",
            "Practical techniques for effective salary and promotion negotiations, addressing specific challenges women often face.",
            ResourceType::Course,
            "https://www.linkedin.com/learning/negotiation-strategies-for-women",
            "https://images.unsplash.com/photo-1573497620292-1c1381229a3f",
            &["career", "negotiation", "salary", "professional development"],
            35,
            Some(90),
            None,
        ),
        resource(
            "15",
            "Building Gender-Balanced Engineering Teams",
            "Strategies for recruiting, retaining, and promoting women in technical roles.",
            ResourceType::Article,
            "https://example.com/gender-balanced-teams",
            "https://images.unsplash.com/photo-1573164713712-03790a178651",
            &["recruitment", "retention", "team building", "leadership"],
            25,
            Some(15),
            Some(
                "# Building Gender-Balanced Engineering Teams\n\n\
                 Balance starts in the pipeline (inclusive job descriptions, diverse sourcing channels) but is won in retention: equitable on-call and glue-work distribution, sponsorship into visible projects, and promotion criteria that reward impact rather than self-promotion.",
            ),
        ),
        resource(
            "16",
            "Open Source Communities and Gender Inclusion",
            "How to make open source projects and communities more welcoming and accessible to women contributors.",
            ResourceType::Article,
            "https://example.com/open-source-inclusion",
            "https://images.unsplash.com/photo-1552664730-d307ca884978",
            &["open source", "community", "contribution", "inclusion"],
            15,
            Some(13),
            Some(
                "# Open Source Communities and Gender Inclusion\n\n\
                 Women are a small fraction of open source contributors, far below their share of professional developers. Projects that adopt enforced codes of conduct, label good first issues, and review newcomer patches kindly see measurably more contributors from underrepresented groups.",
            ),
        ),
        resource(
            "17",
            "Data Feminism: Principles for Equitable Data Science",
            "How to apply feminist principles to data collection, analysis, and visualization for more ethical and inclusive outcomes.",
            ResourceType::Course,
            "https://www.edx.org/course/data-feminism",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71",
            &["data science", "ethics", "feminism", "research", "visualization"],
            55,
            Some(150),
            None,
        ),
        resource(
            "18",
            "Venture Capital and the Gender Funding Gap",
            "Analysis of disparities in startup funding and strategies for women entrepreneurs to overcome these challenges.",
            ResourceType::Article,
            "https://example.com/vc-gender-gap",
            "https://images.unsplash.com/photo-1559526324-593bc073d938",
            &["entrepreneurship", "funding", "startups", "venture capital"],
            70,
            Some(17),
            Some(
                "# Venture Capital and the Gender Funding Gap\n\n\
                 Startups founded solely by women receive a low single-digit percentage of venture funding. Investors ask women prevention-framed questions and men promotion-framed ones, which alone predicts funding differences. Diverse investment committees and standardized pitch evaluation narrow the gap.",
            ),
        ),
        resource(
            "19",
            "Cybersecurity from a Gender Perspective",
            "How gender affects online security risks and protective strategies for women and marginalized groups.",
            ResourceType::Course,
            "https://www.futurelearn.com/courses/cyber-security-basics",
            "https://images.unsplash.com/photo-1563013544-824ae1b704d3",
            &["cybersecurity", "online safety", "privacy", "digital security"],
            20,
            Some(120),
            None,
        ),
        resource(
            "20",
            "Intersectionality in Tech: Beyond Gender",
            "Understanding how gender intersects with race, class, disability, and other identities in technology contexts.",
            ResourceType::Article,
            "https://example.com/intersectionality-tech",
            "https://images.unsplash.com/photo-1573164574572-cb89e39749b4",
            &["intersectionality", "diversity", "inclusion", "equity"],
            10,
            Some(18),
            Some(
                "# Intersectionality in Tech: Beyond Gender\n\n\
                 Gender never acts alone. Women of color, disabled women, and LGBTQ+ people in tech face compounding barriers that single-axis diversity programs miss. Disaggregate your data, fund employee resource groups, and design interventions for the people at the intersections.",
            ),
        ),
    ]
});

static QUIZZES: Lazy<Vec<Quiz>> = Lazy::new(|| {
    vec![
        Quiz {
            id: "1".to_string(),
            title: "Gender Equality Basics".to_string(),
            description: "Test your knowledge of fundamental gender equality concepts.".to_string(),
            questions: vec![
                quiz_question(
                    "1-1",
                    "What is gender bias?",
                    [
                        "Preferring one gender over another",
                        "Unconscious attitudes that influence our perceptions about gender",
                        "Laws that discriminate based on gender",
                        "All of the above",
                    ],
                    3,
                    "Gender bias encompasses all these aspects - conscious preferences, unconscious attitudes, and systemic discrimination.",
                ),
                quiz_question(
                    "1-2",
                    "Which of the following is NOT typically a barrier to gender equality in tech?",
                    [
                        "Lack of role models",
                        "Unconscious bias in hiring",
                        "Equal pay legislation",
                        "Inflexible work arrangements",
                    ],
                    2,
                    "Equal pay legislation actually aims to promote gender equality, while the other options represent barriers.",
                ),
                quiz_question(
                    "1-3",
                    "What percentage of the global technology workforce is female?",
                    ["Around 50%", "Around 35%", "Around 25%", "Around 10%"],
                    2,
                    "Women make up approximately 25% of the global technology workforce, though this varies by country and specific tech field.",
                ),
            ],
        },
        Quiz {
            id: "2".to_string(),
            title: "Digital Inclusion Challenge".to_string(),
            description: "How much do you know about creating inclusive digital environments?"
                .to_string(),
            questions: vec![
                quiz_question(
                    "2-1",
                    "Which of these is an example of inclusive design in digital products?",
                    [
                        "Using technical jargon to appear professional",
                        "Designing primarily for power users",
                        "Ensuring color schemes work for colorblind users",
                        "Requiring the latest devices to access features",
                    ],
                    2,
                    "Inclusive design considers diverse users, including those with disabilities like color blindness.",
                ),
                quiz_question(
                    "2-2",
                    "What is \"algorithmic bias\"?",
                    [
                        "When AI systems reflect or amplify existing prejudices",
                        "When algorithms run more slowly for certain users",
                        "A programming error that causes incorrect calculations",
                        "The tendency of algorithms to favor simple solutions",
                    ],
                    0,
                    "Algorithmic bias occurs when AI systems and algorithms reflect or amplify existing social prejudices, often due to biased training data.",
                ),
            ],
        },
        Quiz {
            id: "3".to_string(),
            title: "Women in Computing History".to_string(),
            description: "Discover the often overlooked contributions of women to computing history."
                .to_string(),
            questions: vec![
                quiz_question(
                    "3-1",
                    "Who is considered the first computer programmer?",
                    [
                        "Grace Hopper",
                        "Ada Lovelace",
                        "Katherine Johnson",
                        "Margaret Hamilton",
                    ],
                    1,
                    "Ada Lovelace wrote the first algorithm intended for implementation on Charles Babbage's Analytical Engine in the 1840s, making her the first computer programmer.",
                ),
                quiz_question(
                    "3-2",
                    "Which woman coined the term \"software engineering\"?",
                    [
                        "Margaret Hamilton",
                        "Grace Hopper",
                        "Jean Sammet",
                        "Frances Allen",
                    ],
                    0,
                    "Margaret Hamilton, who led the team that wrote the onboard flight software for NASA's Apollo missions, coined the term \"software engineering\" to give legitimacy to the discipline.",
                ),
                quiz_question(
                    "3-3",
                    "Who invented the compiler, which translates written instructions into code that computers can read?",
                    [
                        "Ada Lovelace",
                        "Grace Hopper",
                        "Katherine Johnson",
                        "Hedy Lamarr",
                    ],
                    1,
                    "Grace Hopper invented the first compiler in 1952, which translated written language into machine code. She also popularized the term \"debugging\" after removing an actual moth from a computer.",
                ),
            ],
        },
        Quiz {
            id: "4".to_string(),
            title: "Gender-Inclusive Language".to_string(),
            description:
                "Test your knowledge of gender-inclusive language in professional and technical contexts."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "4-1",
                    "Which of the following is an example of gender-inclusive language?",
                    [
                        "Mankind has always strived for technological advancement",
                        "The user should enter his password",
                        "Each team member should submit their report by Friday",
                        "The stewardess will assist you with your luggage",
                    ],
                    2,
                    "Using \"their\" as a singular pronoun is gender-inclusive as it doesn't assume the gender of the team members.",
                ),
                quiz_question(
                    "4-2",
                    "Which term is most gender-inclusive?",
                    ["Manpower", "Workforce", "Manmade", "Mankind"],
                    1,
                    "\"Workforce\" is gender-inclusive because it doesn't contain gendered language, unlike \"manpower,\" \"manmade,\" or \"mankind.\"",
                ),
                quiz_question(
                    "4-3",
                    "In technical documentation, what's the best approach for gender inclusivity?",
                    [
                        "Alternate between using \"he\" and \"she\"",
                        "Always use \"he/she\" or \"s/he\"",
                        "Use gender-neutral terms and plural forms where possible",
                        "Always address the reader as \"you\"",
                    ],
                    2,
                    "Using gender-neutral terms and plural forms (e.g., \"users\" instead of \"the user\") helps avoid gendered pronouns altogether.",
                ),
            ],
        },
        Quiz {
            id: "5".to_string(),
            title: "Unconscious Bias in Tech".to_string(),
            description:
                "Identify and understand unconscious biases that affect gender equality in technology."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "5-1",
                    "What is \"affinity bias\"?",
                    [
                        "The tendency to prefer people who are similar to ourselves",
                        "The assumption that someone is competent based on their appearance",
                        "The preference for working with familiar technologies",
                        "The bias toward hiring candidates from prestigious universities",
                    ],
                    0,
                    "Affinity bias is our tendency to connect with people who share similar interests, experiences, and backgrounds, which can lead to homogeneous teams.",
                ),
                quiz_question(
                    "5-2",
                    "Research shows that in performance reviews, women are more likely than men to receive feedback about:",
                    [
                        "Technical skills",
                        "Leadership potential",
                        "Communication style",
                        "Strategic thinking",
                    ],
                    2,
                    "Studies show women receive more feedback about communication style and personality traits, while men receive more feedback about technical skills and business results.",
                ),
                quiz_question(
                    "5-3",
                    "What is \"stereotype threat\"?",
                    [
                        "When people avoid stereotyping others",
                        "When people conform to negative stereotypes about their group",
                        "When people feel at risk of confirming negative stereotypes about their group",
                        "When people actively fight against stereotypes",
                    ],
                    2,
                    "Stereotype threat occurs when people feel at risk of confirming negative stereotypes about their social group, which can impair performance and increase anxiety.",
                ),
            ],
        },
        Quiz {
            id: "6".to_string(),
            title: "Gender Pay Gap in Technology".to_string(),
            description:
                "Understand the factors contributing to the gender pay gap in the tech industry."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "6-1",
                    "On average, women in tech earn what percentage of what men earn for the same work?",
                    ["95-100%", "85-95%", "75-85%", "Less than 75%"],
                    1,
                    "Studies consistently show that women in tech earn about 85-95% of what men earn for comparable work, even after controlling for factors like experience and education.",
                ),
                quiz_question(
                    "6-2",
                    "Which of the following is NOT a major contributor to the gender pay gap in tech?",
                    [
                        "Differences in salary negotiation",
                        "Unconscious bias in performance evaluation",
                        "Women's inherent preference for lower-paying roles",
                        "Lack of salary transparency",
                    ],
                    2,
                    "There is no evidence that women inherently prefer lower-paying roles. The gender pay gap is caused by structural and social factors, not inherent preferences.",
                ),
                quiz_question(
                    "6-3",
                    "The gender pay gap typically widens as women advance in their careers. Why?",
                    [
                        "Women become less interested in higher pay as they age",
                        "Compounding effects of smaller raises and fewer promotions over time",
                        "Men's technical skills improve more rapidly with age",
                        "Women are more likely to accept pay cuts in senior roles",
                    ],
                    1,
                    "The gender pay gap often widens with seniority due to the compounding effects of smaller percentage raises, missed promotions, and career interruptions over time.",
                ),
            ],
        },
        Quiz {
            id: "7".to_string(),
            title: "Inclusive Recruitment Practices".to_string(),
            description:
                "Learn about strategies for reducing bias and increasing diversity in tech hiring."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "7-1",
                    "Which of these job description practices is most likely to encourage women to apply?",
                    [
                        "Emphasizing competitive environment and individual achievement",
                        "Requiring candidates to meet 100% of listed qualifications",
                        "Using gender-neutral language and focusing on company values",
                        "Highlighting the technical complexity of the role",
                    ],
                    2,
                    "Research shows that job descriptions using gender-neutral language and emphasizing values like collaboration and impact attract more female applicants.",
                ),
                quiz_question(
                    "7-2",
                    "What is \"blind recruitment\"?",
                    [
                        "Hiring without conducting interviews",
                        "Removing identifying information like names and gender from applications",
                        "Recruiting candidates without telling them the company name",
                        "Hiring based solely on technical assessments",
                    ],
                    1,
                    "Blind recruitment involves removing identifying information (names, gender, age, etc.) from applications to reduce unconscious bias in the initial screening process.",
                ),
                quiz_question(
                    "7-3",
                    "Which interview practice has been shown to reduce gender bias in hiring?",
                    [
                        "Unstructured interviews where each candidate is asked different questions",
                        "Structured interviews with consistent questions and evaluation criteria",
                        "Group interviews where candidates compete directly",
                        "Stress interviews that test how candidates handle pressure",
                    ],
                    1,
                    "Structured interviews with predetermined questions and clear evaluation criteria reduce the impact of unconscious bias by ensuring all candidates are assessed on the same factors.",
                ),
            ],
        },
        Quiz {
            id: "8".to_string(),
            title: "Gender and AI Ethics".to_string(),
            description:
                "Explore the ethical implications of gender bias in artificial intelligence systems."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "8-1",
                    "Which of the following is an example of gender bias in AI systems?",
                    [
                        "Voice recognition systems that work better for male voices",
                        "Facial recognition that works equally well for all genders",
                        "Translation software that preserves gender-neutral language",
                        "Image search results showing diverse representations",
                    ],
                    0,
                    "Many voice recognition systems have historically performed better for male voices because they were trained primarily on male voice data, demonstrating how training data bias affects AI performance.",
                ),
                quiz_question(
                    "8-2",
                    "Why might an AI hiring tool discriminate against women?",
                    [
                        "AI is programmed to prefer male candidates",
                        "If trained on historical hiring data that favored men",
                        "Women typically provide less information on resumes",
                        "AI naturally recognizes superior qualifications in male candidates",
                    ],
                    1,
                    "AI systems learn from historical data. If past hiring favored men, the AI will learn these patterns and perpetuate the bias unless specifically designed to counteract it.",
                ),
                quiz_question(
                    "8-3",
                    "Which approach helps reduce gender bias in AI systems?",
                    [
                        "Using larger datasets without examining their composition",
                        "Removing gender as a variable from all AI systems",
                        "Having diverse teams develop and test AI systems",
                        "Limiting AI to applications where gender is irrelevant",
                    ],
                    2,
                    "Diverse development teams are more likely to identify potential biases, consider different perspectives, and test for a wider range of scenarios, resulting in more equitable AI systems.",
                ),
            ],
        },
        Quiz {
            id: "9".to_string(),
            title: "Mentorship and Sponsorship".to_string(),
            description:
                "Understand the difference between mentorship and sponsorship and their impact on gender equality."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "9-1",
                    "What is the primary difference between a mentor and a sponsor?",
                    [
                        "Mentors are paid while sponsors are volunteers",
                        "Mentors give advice while sponsors advocate for your advancement",
                        "Mentors are within your organization while sponsors are external",
                        "Mentors focus on technical skills while sponsors focus on soft skills",
                    ],
                    1,
                    "Mentors provide guidance, feedback, and advice, while sponsors actively advocate for your advancement, recommend you for opportunities, and use their influence to help you progress.",
                ),
                quiz_question(
                    "9-2",
                    "Research shows that women in tech are:",
                    [
                        "More likely to have mentors than men",
                        "Less likely to have sponsors than men",
                        "Uninterested in mentorship opportunities",
                        "More likely to become mentors themselves",
                    ],
                    1,
                    "Studies show that while women often have mentors, they are less likely than men to have sponsors who advocate for their advancement to leadership positions.",
                ),
                quiz_question(
                    "9-3",
                    "Which of the following is most likely to help women advance to leadership positions in tech?",
                    [
                        "Having multiple mentors who provide advice",
                        "Having a sponsor who advocates for them with senior leadership",
                        "Participating in women-only networking events",
                        "Receiving regular performance feedback",
                    ],
                    1,
                    "While all these factors can help, research consistently shows that sponsorship—having someone with influence advocate for your advancement—is the most critical factor in reaching leadership positions.",
                ),
            ],
        },
        Quiz {
            id: "10".to_string(),
            title: "Inclusive Product Design".to_string(),
            description:
                "Learn how to create digital products that work well for users of all genders."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "10-1",
                    "What is \"default male bias\" in product design?",
                    [
                        "When products are explicitly marketed to men",
                        "When products are designed based on male preferences",
                        "When products are designed with male users as the unstated default",
                        "When male designers create products",
                    ],
                    2,
                    "Default male bias occurs when products are designed with male users as the unstated norm or default, often unintentionally, resulting in products that work less well for women and non-binary users.",
                ),
                quiz_question(
                    "10-2",
                    "Which of these is an example of gender-inclusive product design?",
                    [
                        "Creating separate \"for women\" versions of products with simplified features",
                        "Using pink color schemes for features targeted at women",
                        "Designing health tracking apps that accommodate diverse body types and health needs",
                        "Assuming gender based on user behavior and customizing accordingly",
                    ],
                    2,
                    "Gender-inclusive design considers diverse needs without stereotyping. Health apps that accommodate different body types and health needs (including menstruation, pregnancy, etc.) exemplify inclusive design.",
                ),
                quiz_question(
                    "10-3",
                    "Why is diverse user testing important for product design?",
                    [
                        "It's a legal requirement for most digital products",
                        "It helps identify issues that designers from dominant groups might miss",
                        "It's only important for products specifically targeting women",
                        "It slows down development but is politically necessary",
                    ],
                    1,
                    "Diverse user testing helps identify usability issues, assumptions, and pain points that designers from dominant groups might not experience or anticipate, resulting in better products for all users.",
                ),
            ],
        },
        Quiz {
            id: "11".to_string(),
            title: "Gender and Cybersecurity".to_string(),
            description:
                "Understand how gender affects online security risks and protective strategies."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "11-1",
                    "Which of the following is a gender-specific online security risk?",
                    [
                        "Phishing attacks",
                        "Malware infections",
                        "Non-consensual intimate image sharing (\"revenge porn\")",
                        "Password theft",
                    ],
                    2,
                    "While anyone can be targeted, non-consensual intimate image sharing disproportionately affects women and is often gender-based, with different motivations and impacts than other cybersecurity threats.",
                ),
                quiz_question(
                    "11-2",
                    "Women in public-facing tech roles often experience:",
                    [
                        "Higher salaries due to visibility",
                        "Targeted harassment campaigns",
                        "Fewer security concerns than men",
                        "More support from online communities",
                    ],
                    1,
                    "Women with public tech roles (like developers, speakers, or content creators) frequently face gender-based harassment campaigns, including doxxing, threats, and coordinated attacks.",
                ),
                quiz_question(
                    "11-3",
                    "Which approach to cybersecurity education is most gender-inclusive?",
                    [
                        "Creating separate security training for women with simplified technical concepts",
                        "Focusing exclusively on technical protections rather than social aspects of security",
                        "Addressing the full spectrum of risks including harassment and privacy violations",
                        "Assuming all users face identical security threats regardless of identity",
                    ],
                    2,
                    "Gender-inclusive security education addresses both technical protections and the social dimensions of security, including risks that disproportionately affect women and other marginalized groups.",
                ),
            ],
        },
        Quiz {
            id: "12".to_string(),
            title: "Work-Life Integration".to_string(),
            description:
                "Explore policies and practices that support gender equality through better work-life integration."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "12-1",
                    "Which policy has been shown to most effectively support gender equality in tech workplaces?",
                    [
                        "Women-only networking events",
                        "Gender-neutral parental leave that encourages all parents to take time off",
                        "Flexible hours only for parents",
                        "Remote work options only for caregivers",
                    ],
                    1,
                    "Gender-neutral parental leave policies that actively encourage all parents to take leave help reduce the \"motherhood penalty\" and promote more equal caregiving responsibilities.",
                ),
                quiz_question(
                    "12-2",
                    "What is \"presenteeism culture\" and how does it affect gender equality?",
                    [
                        "Requiring employees to present their work frequently; it helps women showcase their contributions",
                        "Valuing physical presence in the office over actual productivity; it disadvantages those with caregiving responsibilities",
                        "Encouraging employees to be present on social media; it helps with networking",
                        "Focusing on presentation skills; it can be biased against different communication styles",
                    ],
                    1,
                    "Presenteeism culture values visible presence (early arrival, late departure) over actual productivity. This disadvantages people with caregiving responsibilities, who are disproportionately women.",
                ),
                quiz_question(
                    "12-3",
                    "Which approach to flexible work best supports gender equality?",
                    [
                        "Offering flexibility only to mothers",
                        "Providing flexible options but subtly penalizing those who use them",
                        "Making flexibility available to all employees for any reason",
                        "Requiring all employees to work the same flexible schedule",
                    ],
                    2,
                    "Making flexible work available to all employees for any reason (not just caregiving) normalizes flexibility, reduces stigma, and supports gender equality by preventing the \"mommy track\" effect.",
                ),
            ],
        },
        Quiz {
            id: "13".to_string(),
            title: "Allyship in Tech".to_string(),
            description:
                "Learn effective ways to be an ally for gender equality in technology workplaces."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "13-1",
                    "Which of these is an example of effective allyship in a technical meeting?",
                    [
                        "Explaining technical concepts to women even when they don't ask for help",
                        "Amplifying ideas from women that were overlooked and giving proper credit",
                        "Suggesting that women take notes or organize the meeting",
                        "Complimenting women on their appearance to make them feel welcome",
                    ],
                    1,
                    "Amplification—repeating ideas from women that were overlooked and giving proper credit—is an effective allyship strategy that helps ensure women's contributions are heard and recognized.",
                ),
                quiz_question(
                    "13-2",
                    "What is \"performative allyship\"?",
                    [
                        "Acting as an ally only when it benefits you personally",
                        "Publicly claiming to support gender equality without taking meaningful action",
                        "Performing better than others at supporting women in tech",
                        "Demonstrating allyship through public speaking and events",
                    ],
                    1,
                    "Performative allyship is publicly claiming to support gender equality (often for social credit) without taking meaningful action or making changes that might involve personal cost or discomfort.",
                ),
                quiz_question(
                    "13-3",
                    "Which approach is most effective when you witness gender bias or harassment?",
                    [
                        "Immediately publicly calling out the behavior in strong terms",
                        "Speaking privately to the woman afterward to offer support",
                        "Using the \"distract, delegate, delay, direct, document\" framework to respond appropriately",
                        "Reporting the incident to HR without getting personally involved",
                    ],
                    2,
                    "The 5Ds framework (distract, delegate, delay, direct, document) provides multiple intervention options for different situations, allowing allies to respond effectively while considering safety and context.",
                ),
            ],
        },
        Quiz {
            id: "14".to_string(),
            title: "Gender and Technical Communication".to_string(),
            description:
                "Understand how gender affects communication in technical contexts and strategies for inclusive communication."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "14-1",
                    "Research shows that in technical discussions, women are more likely than men to be:",
                    [
                        "Given more speaking time",
                        "Interrupted while speaking",
                        "Asked for their opinions",
                        "Praised for their technical insights",
                    ],
                    1,
                    "Studies consistently show that women are interrupted more frequently than men in professional settings, particularly in technical discussions.",
                ),
                quiz_question(
                    "14-2",
                    "Which communication pattern can disadvantage women in technical roles?",
                    [
                        "Direct communication being valued over collaborative approaches",
                        "Technical jargon being used frequently",
                        "Written communication being preferred over verbal",
                        "Formal communication being required in all contexts",
                    ],
                    0,
                    "When direct, assertive communication is the only style valued (often coded as masculine), it can disadvantage women who may use more collaborative approaches or face backlash for being assertive.",
                ),
                quiz_question(
                    "14-3",
                    "Which strategy helps create more inclusive technical discussions?",
                    [
                        "Having longer meetings to ensure everyone speaks",
                        "Implementing a \"no questions\" policy to avoid interruptions",
                        "Using a round-robin format where each person speaks in turn",
                        "Assuming technical competence from all participants regardless of gender",
                    ],
                    3,
                    "Assuming technical competence from all participants regardless of gender helps counteract the common pattern where women are asked to prove their technical knowledge more than men.",
                ),
            ],
        },
        Quiz {
            id: "15".to_string(),
            title: "Intersectionality in Tech".to_string(),
            description:
                "Understand how gender intersects with other aspects of identity in technology contexts."
                    .to_string(),
            questions: vec![
                quiz_question(
                    "15-1",
                    "What is \"intersectionality\" in the context of gender equality in tech?",
                    [
                        "The intersection of hardware and software development",
                        "How different technologies interact with each other",
                        "How gender combines with other aspects of identity to shape experiences",
                        "The point where gender bias becomes illegal discrimination",
                    ],
                    2,
                    "Intersectionality refers to how different aspects of identity (gender, race, class, disability, etc.) combine to create unique experiences that cannot be understood by examining any single factor alone.",
                ),
                quiz_question(
                    "15-2",
                    "Which statement about women of color in tech is supported by research?",
                    [
                        "They face fewer challenges than white women because of diversity initiatives",
                        "They experience the same challenges as white women, just more intensely",
                        "They face unique challenges that differ from both white women and men of color",
                        "Their experiences are identical to those of men of color",
                    ],
                    2,
                    "Research shows women of color face unique challenges that differ qualitatively (not just quantitatively) from both white women and men of color, demonstrating the importance of intersectional approaches.",
                ),
                quiz_question(
                    "15-3",
                    "Which approach best addresses intersectional challenges in tech?",
                    [
                        "Focusing exclusively on gender and addressing other aspects of identity separately",
                        "Creating separate initiatives for each combination of identity factors",
                        "Designing inclusive programs that consider how different aspects of identity interact",
                        "Addressing only the most common identity combinations",
                    ],
                    2,
                    "Effective approaches consider how different aspects of identity interact and create programs flexible enough to address diverse experiences, rather than treating each aspect of identity in isolation.",
                ),
            ],
        },
    ]
});

static ASSESSMENTS: Lazy<Vec<Assessment>> = Lazy::new(|| {
    vec![
        Assessment {
            id: "1".to_string(),
            title: "Organizational Gender Equality Assessment".to_string(),
            description:
                "Evaluate your organization's approach to gender equality in the digital workplace."
                    .to_string(),
            questions: vec![
                graded_question(
                    "1-1",
                    "Does your organization have a formal policy on gender equality?",
                    [
                        "Yes, comprehensive and actively implemented",
                        "Yes, but implementation is inconsistent",
                        "No formal policy, but informal practices exist",
                        "No policy or practices addressing gender equality",
                    ],
                ),
                graded_question(
                    "1-2",
                    "How would you describe the gender balance in technical roles?",
                    [
                        "Roughly equal representation of men and women",
                        "Some representation of women, but still male-dominated",
                        "Very few women in technical roles",
                        "No women in technical roles",
                    ],
                ),
                graded_question(
                    "1-3",
                    "Does your organization analyze pay data to identify gender pay gaps?",
                    [
                        "Yes, regularly with transparent results and action plans",
                        "Yes, but results are not widely shared",
                        "Occasionally or informally",
                        "Never",
                    ],
                ),
                graded_question(
                    "1-4",
                    "How would you rate your recruitment processes for reducing gender bias?",
                    [
                        "Comprehensive measures (blind resumes, diverse panels, inclusive job descriptions)",
                        "Some measures in place",
                        "Limited awareness but few concrete measures",
                        "No specific measures to address gender bias in recruitment",
                    ],
                ),
                graded_question(
                    "1-5",
                    "Does your organization offer flexible working arrangements?",
                    [
                        "Yes, comprehensive options available to all employees",
                        "Some options available but with limitations",
                        "Limited flexibility for certain roles only",
                        "No flexible working arrangements",
                    ],
                ),
            ],
        },
        Assessment {
            id: "2".to_string(),
            title: "Digital Product Inclusivity Assessment".to_string(),
            description:
                "Evaluate how inclusive your digital products and services are for users of all genders."
                    .to_string(),
            questions: vec![
                graded_question(
                    "2-1",
                    "How do you consider gender diversity in your user research?",
                    [
                        "We actively ensure diverse gender representation in all user research",
                        "We sometimes consider gender diversity in user research",
                        "We rarely consider gender in our user research approach",
                        "We don't conduct user research or don't consider gender at all",
                    ],
                ),
                graded_question(
                    "2-2",
                    "How do your products handle user gender information?",
                    [
                        "We only collect gender data when necessary and provide inclusive options",
                        "We collect gender data with binary options (male/female) only",
                        "We collect gender data without clear purpose and with limited options",
                        "We make assumptions about user gender based on behavior or other data",
                    ],
                ),
                graded_question(
                    "2-3",
                    "How inclusive is the language and imagery in your digital products?",
                    [
                        "We use gender-neutral language and diverse, non-stereotypical imagery",
                        "We sometimes use inclusive language and imagery but not consistently",
                        "We rarely consider gender implications in our language and imagery",
                        "Our products contain gendered language and stereotypical imagery",
                    ],
                ),
                graded_question(
                    "2-4",
                    "How do you address potential algorithmic bias related to gender?",
                    [
                        "We actively test for and mitigate algorithmic bias related to gender",
                        "We are aware of potential bias issues but address them inconsistently",
                        "We have limited awareness of algorithmic bias related to gender",
                        "We don't consider algorithmic bias in our products",
                    ],
                ),
                graded_question(
                    "2-5",
                    "How do you handle user feedback related to gender inclusivity?",
                    [
                        "We actively seek feedback on inclusivity and make changes accordingly",
                        "We respond to feedback when received but don't actively seek it",
                        "We acknowledge feedback but rarely make changes based on it",
                        "We don't have a process for handling inclusivity feedback",
                    ],
                ),
            ],
        },
        Assessment {
            id: "3".to_string(),
            title: "Recruitment Process Assessment".to_string(),
            description:
                "Evaluate how inclusive your hiring practices are for candidates of all genders."
                    .to_string(),
            questions: vec![
                graded_question(
                    "3-1",
                    "How do you write job descriptions?",
                    [
                        "We use gender-neutral language, focus on essential requirements, and highlight inclusive policies",
                        "We use mostly neutral language but haven't fully reviewed for bias",
                        "We use standard templates without specific attention to gender inclusivity",
                        "We haven't considered gender implications in our job descriptions",
                    ],
                ),
                graded_question(
                    "3-2",
                    "How diverse are your candidate sourcing channels?",
                    [
                        "We use multiple channels including those targeting underrepresented genders in tech",
                        "We use some diverse channels but could expand further",
                        "We rely mainly on standard job boards and employee referrals",
                        "We haven't considered diversity in our sourcing strategy",
                    ],
                ),
                graded_question(
                    "3-3",
                    "How do you structure your interview process?",
                    [
                        "We use structured interviews with consistent questions and diverse interview panels",
                        "We have some structure but vary by interviewer or department",
                        "We have limited standardization in our interview process",
                        "We use unstructured interviews that vary significantly",
                    ],
                ),
                graded_question(
                    "3-4",
                    "How do you evaluate technical skills?",
                    [
                        "We use blind technical assessments and structured evaluation criteria",
                        "We have standard technical questions but evaluation may vary",
                        "We assess technical skills differently depending on the interviewer",
                        "We have no standard approach to technical evaluation",
                    ],
                ),
                graded_question(
                    "3-5",
                    "How do you make final hiring decisions?",
                    [
                        "We use diverse hiring panels and objective criteria with checks for bias",
                        "We use hiring panels but with limited diversity or bias checks",
                        "Decisions are made by individual hiring managers with some oversight",
                        "Decisions are made informally with limited structure or oversight",
                    ],
                ),
            ],
        },
        Assessment {
            id: "4".to_string(),
            title: "Workplace Culture Assessment".to_string(),
            description:
                "Evaluate how inclusive your workplace culture is for employees of all genders."
                    .to_string(),
            questions: vec![
                graded_question(
                    "4-1",
                    "How would you describe day-to-day interactions between genders in your workplace?",
                    [
                        "Consistently respectful with equal participation and recognition",
                        "Generally respectful but with occasional issues",
                        "Somewhat problematic with noticeable differences in treatment",
                        "Frequently problematic with clear patterns of exclusion or disrespect",
                    ],
                ),
                graded_question(
                    "4-2",
                    "How are social and networking events structured in your organization?",
                    [
                        "Designed to be inclusive and accessible to all genders and life circumstances",
                        "Somewhat inclusive but could be improved",
                        "Tend to favor traditionally masculine activities or schedules",
                        "Frequently exclude certain genders due to content or timing",
                    ],
                ),
                graded_question(
                    "4-3",
                    "How does your organization handle reports of gender-based harassment or discrimination?",
                    [
                        "Clear processes that are consistently followed with appropriate consequences",
                        "Processes exist but implementation is inconsistent",
                        "Limited formal processes with ad hoc responses",
                        "No clear process or reports are not taken seriously",
                    ],
                ),
                graded_question(
                    "4-4",
                    "How are work contributions recognized in your organization?",
                    [
                        "Systematic approach that ensures fair recognition regardless of gender",
                        "Generally fair but with some inconsistencies",
                        "Recognition tends to favor certain genders or work styles",
                        "Clear patterns of unequal recognition based on gender",
                    ],
                ),
                graded_question(
                    "4-5",
                    "How comfortable would employees of all genders feel expressing concerns about inclusivity?",
                    [
                        "Very comfortable with multiple channels and no fear of retaliation",
                        "Somewhat comfortable but with some hesitation",
                        "Likely uncomfortable with concerns about consequences",
                        "Very uncomfortable with clear risks to career or treatment",
                    ],
                ),
            ],
        },
        Assessment {
            id: "5".to_string(),
            title: "Leadership and Advancement Assessment".to_string(),
            description:
                "Evaluate how equitable your promotion and leadership development practices are across genders."
                    .to_string(),
            questions: vec![
                graded_question(
                    "5-1",
                    "What is the gender balance in your organization's leadership?",
                    [
                        "Roughly equal representation across all leadership levels",
                        "Some women in leadership but less representation at higher levels",
                        "Very few women in leadership positions",
                        "No women in leadership positions",
                    ],
                ),
                graded_question(
                    "5-2",
                    "How transparent are your promotion criteria and processes?",
                    [
                        "Fully transparent with clear, objective criteria applied consistently",
                        "Somewhat transparent but with some subjective elements",
                        "Limited transparency with unclear criteria",
                        "No transparency in how promotion decisions are made",
                    ],
                ),
                graded_question(
                    "5-3",
                    "How do you identify employees for leadership development?",
                    [
                        "Systematic approach with checks for gender bias and equal access",
                        "Somewhat structured approach but with potential for bias",
                        "Primarily based on manager recommendations with limited oversight",
                        "Ad hoc process with no consideration of gender equity",
                    ],
                ),
                graded_question(
                    "5-4",
                    "How do you support women and underrepresented genders in developing leadership skills?",
                    [
                        "Comprehensive programs including mentorship, sponsorship, and targeted development",
                        "Some support programs but limited in scope or access",
                        "General leadership development with no gender-specific components",
                        "No specific support for leadership development",
                    ],
                ),
                graded_question(
                    "5-5",
                    "How do you monitor and address gender disparities in advancement?",
                    [
                        "Regular data analysis with clear action plans and accountability",
                        "Some monitoring but limited action planning",
                        "Occasional or informal review without systematic action",
                        "No monitoring of gender disparities in advancement",
                    ],
                ),
            ],
        },
        Assessment {
            id: "6".to_string(),
            title: "Compensation Equity Assessment".to_string(),
            description: "Evaluate how equitable your compensation practices are across genders."
                .to_string(),
            questions: vec![
                graded_question(
                    "6-1",
                    "How does your organization determine starting salaries?",
                    [
                        "Structured process with predetermined ranges and checks for bias",
                        "General salary bands but with negotiation that could introduce bias",
                        "Primarily based on candidate's salary history or negotiation",
                        "No clear process for determining starting salaries",
                    ],
                ),
                graded_question(
                    "6-2",
                    "How transparent is your organization about compensation?",
                    [
                        "Full transparency with published salary ranges and clear criteria",
                        "Partial transparency with some information shared",
                        "Limited transparency with general policies only",
                        "No transparency about how compensation is determined",
                    ],
                ),
                graded_question(
                    "6-3",
                    "How does your organization conduct pay equity analyses?",
                    [
                        "Regular comprehensive analyses with action plans to address disparities",
                        "Occasional analyses but limited follow-up",
                        "Informal or limited analyses without systematic approach",
                        "No pay equity analyses conducted",
                    ],
                ),
                graded_question(
                    "6-4",
                    "How are raises and bonuses determined?",
                    [
                        "Structured process with clear criteria and checks for bias",
                        "Some structure but with subjective elements that could introduce bias",
                        "Primarily manager discretion with limited oversight",
                        "No clear process for determining raises and bonuses",
                    ],
                ),
                graded_question(
                    "6-5",
                    "How does your organization handle salary negotiation?",
                    [
                        "Limited negotiation with clear parameters to prevent gender disparities",
                        "Structured negotiation process with some oversight",
                        "Standard negotiation practices without consideration of potential bias",
                        "Unstructured negotiation that likely advantages assertive candidates",
                    ],
                ),
            ],
        },
        Assessment {
            id: "7".to_string(),
            title: "Work-Life Integration Assessment".to_string(),
            description:
                "Evaluate how well your policies support work-life integration for employees of all genders."
                    .to_string(),
            questions: vec![
                graded_question(
                    "7-1",
                    "What parental leave policies does your organization offer?",
                    [
                        "Generous, equal leave for all parents with support for taking full leave",
                        "Moderate leave with some differences based on caregiver status",
                        "Minimal leave or significant differences between primary/secondary caregivers",
                        "Only what is legally required with no additional support",
                    ],
                ),
                graded_question(
                    "7-2",
                    "How flexible are your organization's work arrangements?",
                    [
                        "Comprehensive flexibility options available to all employees",
                        "Some flexibility but with limitations or inconsistent application",
                        "Limited flexibility available only for certain roles or situations",
                        "Rigid work arrangements with little to no flexibility",
                    ],
                ),
                graded_question(
                    "7-3",
                    "How does your organization handle work outside regular hours?",
                    [
                        "Clear boundaries with rare after-hours work and no penalty for disconnecting",
                        "Some expectations for availability but generally reasonable",
                        "Frequent expectation of after-hours availability",
                        "Constant connectivity expected with negative consequences for boundaries",
                    ],
                ),
                graded_question(
                    "7-4",
                    "How are caregiving responsibilities viewed in your organization?",
                    [
                        "Normalized for all genders with supportive policies and culture",
                        "Generally accepted but with some career impact",
                        "Accepted for women but viewed negatively for men",
                        "Viewed as a lack of commitment regardless of gender",
                    ],
                ),
                graded_question(
                    "7-5",
                    "How does your organization schedule meetings and events?",
                    [
                        "Considerate of various life circumstances with core hours for meetings",
                        "Generally considerate but with occasional issues",
                        "Limited consideration of outside commitments",
                        "No consideration of personal commitments or caregiving responsibilities",
                    ],
                ),
            ],
        },
        Assessment {
            id: "8".to_string(),
            title: "Technical Team Inclusion Assessment".to_string(),
            description:
                "Evaluate how inclusive your technical teams are for members of all genders."
                    .to_string(),
            questions: vec![
                graded_question(
                    "8-1",
                    "How are technical tasks assigned within teams?",
                    [
                        "Systematic approach ensuring equal access to high-value work regardless of gender",
                        "Generally fair but with some patterns of gendered task allocation",
                        "Noticeable patterns where certain genders get more career-enhancing tasks",
                        "Clear bias in task allocation with gender stereotyping",
                    ],
                ),
                graded_question(
                    "8-2",
                    "How inclusive are technical discussions and decision-making?",
                    [
                        "Structured to ensure all voices are heard with equal consideration",
                        "Generally inclusive but with some domination by certain team members",
                        "Often dominated by specific genders with others frequently interrupted",
                        "Consistently exclusive with clear patterns of whose input is valued",
                    ],
                ),
                graded_question(
                    "8-3",
                    "How is technical credibility established in your teams?",
                    [
                        "Based on demonstrated skills and contributions regardless of gender",
                        "Generally merit-based but with some bias in whose expertise is trusted",
                        "Noticeably harder for certain genders to establish credibility",
                        "Clear patterns where technical credibility is assumed or questioned based on gender",
                    ],
                ),
                graded_question(
                    "8-4",
                    "How do team members give and receive feedback on technical work?",
                    [
                        "Consistent, constructive approach applied equally regardless of gender",
                        "Generally consistent but with some differences in tone or detail",
                        "Noticeable differences in how feedback is given based on gender",
                        "Clearly biased feedback patterns (harsher/softer, technical/interpersonal) based on gender",
                    ],
                ),
                graded_question(
                    "8-5",
                    "How is credit for technical contributions allocated?",
                    [
                        "Systematic approach ensuring proper attribution regardless of gender",
                        "Generally fair but with occasional issues of misattribution",
                        "Noticeable patterns where certain genders' contributions are overlooked",
                        "Frequent misattribution with clear gender patterns",
                    ],
                ),
            ],
        },
        Assessment {
            id: "9".to_string(),
            title: "Mentorship and Sponsorship Assessment".to_string(),
            description:
                "Evaluate how equitable your mentorship and sponsorship opportunities are across genders."
                    .to_string(),
            questions: vec![
                graded_question(
                    "9-1",
                    "How formalized are mentorship opportunities in your organization?",
                    [
                        "Structured program with equal access and monitoring for gender equity",
                        "Some formal opportunities but with inconsistent access",
                        "Primarily informal mentorship with limited oversight",
                        "No mentorship opportunities or completely ad hoc",
                    ],
                ),
                graded_question(
                    "9-2",
                    "How does sponsorship (advocacy for advancement) work in your organization?",
                    [
                        "Intentional sponsorship initiatives with attention to gender equity",
                        "Some sponsorship occurs but without systematic approach",
                        "Sponsorship happens informally and unevenly across genders",
                        "Little to no sponsorship culture or clear bias in who receives sponsorship",
                    ],
                ),
                graded_question(
                    "9-3",
                    "How are high-visibility projects and opportunities allocated?",
                    [
                        "Transparent process ensuring equal access regardless of gender",
                        "Somewhat transparent but with potential for bias",
                        "Limited transparency with noticeable patterns of unequal access",
                        "No transparency with clear bias in allocation",
                    ],
                ),
                graded_question(
                    "9-4",
                    "How diverse are the mentors and sponsors in your organization?",
                    [
                        "Diverse group reflecting the organization's gender diversity goals",
                        "Some diversity but with room for improvement",
                        "Limited diversity with mentorship/sponsorship concentrated among one gender",
                        "No diversity with clear homogeneity in who provides mentorship/sponsorship",
                    ],
                ),
                graded_question(
                    "9-5",
                    "How does your organization support cross-gender mentoring relationships?",
                    [
                        "Proactive support with guidelines and resources for effective cross-gender mentoring",
                        "Some support but limited guidance",
                        "No specific support but cross-gender mentoring is allowed",
                        "Barriers exist to cross-gender mentoring relationships",
                    ],
                ),
            ],
        },
        Assessment {
            id: "10".to_string(),
            title: "Gender Inclusion in AI and Product Development".to_string(),
            description:
                "Evaluate how well your AI systems and product development processes address gender considerations."
                    .to_string(),
            questions: vec![
                graded_question(
                    "10-1",
                    "How do you address potential gender bias in AI training data?",
                    [
                        "Comprehensive approach to identifying and mitigating bias in all training data",
                        "Some processes to address obvious bias but not systematic",
                        "Limited awareness with minimal action",
                        "No consideration of gender bias in training data",
                    ],
                ),
                graded_question(
                    "10-2",
                    "How diverse are the teams developing your AI systems or products?",
                    [
                        "Teams reflect gender diversity goals at all levels including technical and leadership roles",
                        "Some diversity but not consistent across all teams or levels",
                        "Limited diversity with few women in technical roles",
                        "No gender diversity in AI/product development teams",
                    ],
                ),
                graded_question(
                    "10-3",
                    "How do you test AI systems or products for gender bias before deployment?",
                    [
                        "Rigorous testing specifically designed to identify gender bias with clear standards",
                        "Some testing for bias but not comprehensive",
                        "Limited or ad hoc testing without specific focus on gender",
                        "No testing for gender bias",
                    ],
                ),
                graded_question(
                    "10-4",
                    "How do you handle user feedback related to gender bias in AI systems or products?",
                    [
                        "Systematic collection and prioritization of bias-related feedback with clear response protocols",
                        "Feedback is collected but response is inconsistent",
                        "Limited mechanisms for bias-specific feedback",
                        "No specific process for handling gender bias feedback",
                    ],
                ),
                graded_question(
                    "10-5",
                    "How transparent are you about potential limitations or biases in your AI systems or products?",
                    [
                        "Full transparency with clear documentation of limitations and potential biases",
                        "Some transparency but not comprehensive",
                        "Limited transparency with minimal disclosure",
                        "No transparency about potential gender bias issues",
                    ],
                ),
            ],
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique(mut ids: Vec<&str>, expected: usize) {
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), expected);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        assert_unique(
            resources().iter().map(|r| r.id.as_str()).collect(),
            resources().len(),
        );
        assert_unique(
            quizzes().iter().map(|q| q.id.as_str()).collect(),
            quizzes().len(),
        );
        assert_unique(
            assessments().iter().map(|a| a.id.as_str()).collect(),
            assessments().len(),
        );
    }

    #[test]
    fn test_full_interactive_catalog_is_bundled() {
        assert_eq!(resources().len(), 20);
        assert_eq!(quizzes().len(), 15);
        assert_eq!(assessments().len(), 10);
        assert_eq!(
            find_quiz("6").unwrap().title,
            "Gender Pay Gap in Technology"
        );
        assert_eq!(find_quiz("15").unwrap().questions.len(), 3);
        assert_eq!(
            find_assessment("10").unwrap().title,
            "Gender Inclusion in AI and Product Development"
        );
        assert_eq!(find_assessment("10").unwrap().questions.len(), 5);
    }

    #[test]
    fn test_quiz_correct_answers_are_valid_indices() {
        for quiz in quizzes() {
            for question in &quiz.questions {
                assert!(
                    question.correct_answer < question.options.len(),
                    "quiz {} question {} has out-of-range answer",
                    quiz.id,
                    question.id
                );
            }
        }
    }

    #[test]
    fn test_assessment_weights_match_options() {
        for assessment in assessments() {
            for question in &assessment.questions {
                assert_eq!(
                    question.weights.len(),
                    question.options.len(),
                    "assessment {} question {} weight/option mismatch",
                    assessment.id,
                    question.id
                );
                assert!(question.weights.iter().all(|&w| w <= 3));
            }
        }
    }

    #[test]
    fn test_find_lookups() {
        assert!(find_resource("1").is_some());
        assert!(find_resource("999").is_none());
        assert_eq!(find_quiz("3").unwrap().questions.len(), 3);
        assert_eq!(find_assessment("1").unwrap().questions.len(), 5);
    }

    #[test]
    fn test_courses_and_tools_are_external_links() {
        // Entries without inline content must still carry a URL to open.
        for resource in resources().iter().filter(|r| r.content.is_none()) {
            assert!(resource.url.starts_with("https://"));
        }
    }
}
