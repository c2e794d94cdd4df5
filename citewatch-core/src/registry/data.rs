//! Built-in citation reference data
//!
//! Rows are (canonical tag, short title, description), grouped by category.

pub(super) type Row = (&'static str, &'static str, &'static str);

pub(super) const SECTIONS: &[(&str, &[Row])] = &[
    ("Resident Rights", RESIDENT_RIGHTS),
    ("Freedom from Abuse, Neglect, and Exploitation", ABUSE_NEGLECT),
    ("Admission, Transfer, and Discharge", ADMISSION_TRANSFER_DISCHARGE),
    ("Resident Assessment", RESIDENT_ASSESSMENT),
    ("Comprehensive Care Plans", CARE_PLANS),
    ("Quality of Life", QUALITY_OF_LIFE),
    ("Quality of Care", QUALITY_OF_CARE),
    ("Physician Services", PHYSICIAN_SERVICES),
    ("Nursing Services", NURSING_SERVICES),
    ("Behavioral Health Services", BEHAVIORAL_HEALTH),
    ("Pharmacy Services", PHARMACY_SERVICES),
    ("Laboratory, Radiology, and Other Diagnostic Services", DIAGNOSTIC_SERVICES),
    ("Dental Services", DENTAL_SERVICES),
    ("Food and Nutrition Services", FOOD_NUTRITION),
    ("Specialized Rehabilitative Services", REHABILITATION),
    ("Administration", ADMINISTRATION),
    ("Quality Assurance and Performance Improvement", QAPI),
    ("Infection Control", INFECTION_CONTROL),
    ("Compliance and Ethics", COMPLIANCE_ETHICS),
    ("Physical Environment", PHYSICAL_ENVIRONMENT),
    ("Training Requirements", TRAINING),
    ("Emergency Preparedness", EMERGENCY_PREPAREDNESS),
    ("Life Safety Code", LIFE_SAFETY),
    ("Resident Rights", LEGACY_RESIDENT_RIGHTS),
    ("Admission, Transfer, and Discharge", LEGACY_ADMISSION_TRANSFER_DISCHARGE),
    ("Freedom from Abuse, Neglect, and Exploitation", LEGACY_ABUSE_RESTRAINTS),
    ("Quality of Life", LEGACY_QUALITY_OF_LIFE),
    ("Resident Assessment", LEGACY_RESIDENT_ASSESSMENT),
    ("Quality of Care", LEGACY_QUALITY_OF_CARE),
    ("Nursing Services", LEGACY_NURSING_SERVICES),
    ("Food and Nutrition Services", LEGACY_DIETARY_SERVICES),
    ("Physician Services", LEGACY_PHYSICIAN_SERVICES),
    ("Specialized Rehabilitative Services", LEGACY_REHABILITATION),
    ("Dental Services", LEGACY_DENTAL_SERVICES),
    ("Pharmacy Services", LEGACY_PHARMACY_SERVICES),
    ("Infection Control", LEGACY_INFECTION_CONTROL),
    ("Physical Environment", LEGACY_PHYSICAL_ENVIRONMENT),
    ("Administration", LEGACY_ADMINISTRATION),
    ("Laboratory, Radiology, and Other Diagnostic Services", LEGACY_DIAGNOSTIC_SERVICES),
    ("Quality Assurance and Performance Improvement", LEGACY_QAPI),
    ("Life Safety Code", LEGACY_LIFE_SAFETY),
];

const RESIDENT_RIGHTS: &[Row] = &[
    ("F-0550", "Resident Rights/Exercise of Rights", "Honor each resident's right to a dignified existence, self-determination and communication with people inside and outside the facility."),
    ("F-0551", "Rights Exercised by Representative", "Allow a resident representative to exercise the resident's rights to the extent permitted by law."),
    ("F-0552", "Right to be Informed/Make Treatment Decisions", "Inform the resident of their total health status and support informed treatment decisions."),
    ("F-0553", "Right to Participate in Planning Care", "Let the resident take part in developing and revising their person-centered care plan."),
    ("F-0554", "Resident Self-Admin Meds-Clinically Appropriate", "Permit self-administration of drugs when the interdisciplinary team finds it clinically appropriate."),
    ("F-0555", "Right to Choose/Be Informed of Attending Physician", "Let the resident choose an attending physician and know how to contact them."),
    ("F-0557", "Respect, Dignity/Right to have Personal Property", "Treat the resident with respect and dignity and allow use of personal belongings."),
    ("F-0558", "Reasonable Accommodation of Needs/Preferences", "Reasonably accommodate individual needs and preferences in the physical environment."),
    ("F-0559", "Choose/Be Notified of Room/Roommate Change", "Give notice and reasons before a change in room or roommate and honor shared-room choices."),
    ("F-0560", "Right to Refuse Certain Transfers", "Honor a resident's refusal of transfers made for staff convenience or research."),
    ("F-0561", "Self-Determination", "Support choices about activities, schedules, health care and providers consistent with the care plan."),
    ("F-0562", "Immediate Access to Resident", "Provide immediate access to the resident for officials, physicians, ombudsmen and family."),
    ("F-0563", "Right to Receive/Deny Visitors", "Support the resident's right to receive visitors of their choosing at any time."),
    ("F-0564", "Inform of Visitation Rights/Equal Visitation Privileges", "Inform residents of visitation rights and apply visitation rules equally."),
    ("F-0565", "Resident/Family Group and Response", "Support resident and family groups and act promptly on their grievances and recommendations."),
    ("F-0566", "Right to Perform Facility Services or Refuse", "Let the resident decline to perform services for the facility, with documented terms when they agree."),
    ("F-0567", "Protection/Management of Personal Funds", "Manage resident funds on deposit with written authorization and timely access."),
    ("F-0568", "Accounting and Records of Personal Funds", "Keep a full and separate accounting of each resident's personal funds."),
    ("F-0569", "Notice and Conveyance of Personal Funds", "Notify Medicaid residents near resource limits and convey funds promptly on discharge or death."),
    ("F-0570", "Surety Bond - Security of Personal Funds", "Purchase a surety bond or alternative to assure the security of resident funds."),
    ("F-0571", "Limitations on Charges to Personal Funds", "Do not charge resident funds for items or services covered by Medicare or Medicaid."),
    ("F-0572", "Notice of Rights and Rules", "Inform the resident of their rights and facility rules orally and in writing."),
    ("F-0573", "Right to Access/Purchase Copies of Records", "Provide access to and copies of personal and medical records on request."),
    ("F-0574", "Required Notices and Contact Information", "Furnish contact information for advocacy agencies and notices of coverage."),
    ("F-0575", "Required Postings", "Post contact information for state agencies, ombudsman and advocacy groups."),
    ("F-0576", "Right to Forms of Communication with Privacy", "Allow private mail, telephone and electronic communication."),
    ("F-0577", "Right to Survey Results/Advocate Agency Info", "Make recent survey results and plans of correction available for examination."),
    ("F-0578", "Request/Refuse/Discontinue Treatment; Formulate Advance Directives", "Honor treatment refusals and maintain advance directive policies."),
    ("F-0579", "Posting/Notice of Medicare/Medicaid on Admission", "Display and provide information on applying for Medicare and Medicaid benefits."),
    ("F-0580", "Notify of Changes (Injury/Decline/Room, etc.)", "Notify the physician and representative of accidents, significant changes and transfers."),
    ("F-0582", "Medicaid/Medicare Coverage/Liability Notice", "Inform residents of covered items and charges for non-covered services."),
    ("F-0583", "Personal Privacy/Confidentiality of Records", "Protect personal privacy and the confidentiality of resident records."),
    ("F-0584", "Safe/Clean/Comfortable/Homelike Environment", "Provide a safe, clean, comfortable and homelike environment."),
    ("F-0585", "Grievances", "Maintain a grievance policy and resolve grievances promptly without reprisal."),
    ("F-0586", "Resident Contact with External Entities", "Do not prohibit or discourage communication with federal, state or local officials."),
];

const ABUSE_NEGLECT: &[Row] = &[
    ("F-0600", "Free from Abuse and Neglect", "Protect residents from abuse, neglect, corporal punishment and involuntary seclusion."),
    ("F-0602", "Free from Misappropriation/Exploitation", "Protect residents from misappropriation of property and exploitation."),
    ("F-0603", "Free from Involuntary Seclusion", "Do not separate residents from others or their room against their will."),
    ("F-0604", "Right to be Free from Physical Restraints", "Do not use physical restraints for discipline or convenience."),
    ("F-0605", "Right to be Free from Chemical Restraints", "Do not use psychotropic drugs for discipline or convenience."),
    ("F-0606", "Not Employ/Engage Staff with Adverse Actions", "Do not employ individuals found guilty of abuse, neglect or exploitation."),
    ("F-0607", "Develop/Implement Abuse/Neglect Policies", "Develop and implement policies that prohibit and prevent abuse and neglect."),
    ("F-0608", "Reporting of Reasonable Suspicion of a Crime", "Ensure covered individuals report reasonable suspicion of a crime."),
    ("F-0609", "Reporting of Alleged Violations", "Report alleged abuse, neglect and injuries of unknown source within required timeframes."),
    ("F-0610", "Investigate/Prevent/Correct Alleged Violation", "Investigate alleged violations, protect residents during the investigation and correct findings."),
];

const ADMISSION_TRANSFER_DISCHARGE: &[Row] = &[
    ("F-0620", "Admissions Policy", "Do not require third-party guarantees or waivers of rights as a condition of admission."),
    ("F-0621", "Equal Practices Regardless of Payment Source", "Maintain identical policies on transfer, discharge and services regardless of payment source."),
    ("F-0622", "Transfer and Discharge Requirements", "Transfer or discharge residents only for permitted reasons with documentation."),
    ("F-0623", "Notice Requirements Before Transfer/Discharge", "Give written notice of transfer or discharge with reasons and appeal rights."),
    ("F-0624", "Preparation for Safe/Orderly Transfer/Discharge", "Prepare and orient residents for a safe and orderly transfer or discharge."),
    ("F-0625", "Notice of Bed-Hold Policy Before/Upon Transfer", "Provide written bed-hold information before and at the time of transfer."),
    ("F-0626", "Permitting Residents to Return to Facility", "Readmit residents returning from hospitalization or therapeutic leave."),
    ("F-0627", "Inappropriate Discharges", "Do not discharge residents in violation of transfer and discharge protections."),
    ("F-0628", "Transfer and Discharge Process", "Document and communicate transfer and discharge information to the receiving provider."),
];

const RESIDENT_ASSESSMENT: &[Row] = &[
    ("F-0635", "Admission Physician Orders for Immediate Care", "Have physician orders for the resident's immediate care at admission."),
    ("F-0636", "Comprehensive Assessments & Timing", "Complete a comprehensive assessment within 14 days of admission and annually."),
    ("F-0637", "Comprehensive Assessment After Significant Change", "Complete a comprehensive assessment within 14 days of a significant change."),
    ("F-0638", "Quarterly Assessment At Least Every 3 Months", "Assess each resident at least every three months."),
    ("F-0639", "Maintain 15 Months of Resident Assessments", "Keep 15 months of assessments in the active record."),
    ("F-0640", "Encoding/Transmitting Resident Assessments", "Encode and transmit assessments to CMS within required timeframes."),
    ("F-0641", "Accuracy of Assessments", "Ensure each assessment accurately reflects the resident's status."),
    ("F-0644", "Coordination of PASARR and Assessments", "Coordinate resident assessments with the pre-admission screening program."),
    ("F-0645", "PASARR Screening for MD & ID", "Screen new admissions for mental disorders and intellectual disabilities."),
    ("F-0646", "MD/ID Significant Change Notification", "Notify the state mental health or ID authority of significant changes."),
];

const CARE_PLANS: &[Row] = &[
    ("F-0655", "Baseline Care Plan", "Develop a baseline care plan within 48 hours of admission."),
    ("F-0656", "Develop/Implement Comprehensive Care Plan", "Develop and implement a comprehensive person-centered care plan with measurable objectives."),
    ("F-0657", "Care Plan Timing and Revision", "Prepare the care plan within 7 days of assessment and revise it after each assessment."),
    ("F-0658", "Services Meet Professional Standards", "Provide services that meet professional standards of quality."),
    ("F-0659", "Qualified Persons", "Have services provided by qualified persons in accordance with the care plan."),
    ("F-0660", "Discharge Planning Process", "Develop and implement an effective discharge planning process."),
    ("F-0661", "Discharge Summary", "Prepare a discharge summary with a recapitulation of stay and reconciled medications."),
];

const QUALITY_OF_LIFE: &[Row] = &[
    ("F-0675", "Quality of Life", "Provide care that supports each resident's highest practicable well-being."),
    ("F-0676", "Activities of Daily Living (ADLs)/Maintain Abilities", "Prevent decline in activities of daily living unless clinically unavoidable."),
    ("F-0677", "ADL Care Provided for Dependent Residents", "Provide dependent residents with services for nutrition, grooming and hygiene."),
    ("F-0678", "Cardio-Pulmonary Resuscitation (CPR)", "Provide basic life support, including CPR, consistent with advance directives."),
    ("F-0679", "Activities Meet Interest/Needs of Each Resident", "Provide an ongoing program of activities matched to resident interests."),
    ("F-0680", "Qualifications of Activity Professional", "Have activities directed by a qualified professional."),
];

const QUALITY_OF_CARE: &[Row] = &[
    ("F-0684", "Quality of Care", "Provide treatment and care in accordance with professional standards and resident choices."),
    ("F-0685", "Treatment/Devices to Maintain Hearing/Vision", "Assist residents in obtaining vision and hearing care and devices."),
    ("F-0686", "Treatment/Services to Prevent/Heal Pressure Ulcers", "Prevent pressure ulcers and provide treatment to promote healing."),
    ("F-0687", "Foot Care", "Provide foot care and treatment to maintain mobility."),
    ("F-0688", "Increase/Prevent Decrease in ROM/Mobility", "Provide treatment to maintain or improve range of motion and mobility."),
    ("F-0689", "Free of Accident Hazards/Supervision/Devices", "Keep the environment free of accident hazards and provide adequate supervision."),
    ("F-0690", "Bowel/Bladder Incontinence, Catheter, UTI", "Provide continence care and prevent catheter-associated urinary tract infections."),
    ("F-0691", "Colostomy, Urostomy, or Ileostomy Care", "Provide ostomy care consistent with professional standards."),
    ("F-0692", "Nutrition/Hydration Status Maintenance", "Maintain acceptable parameters of nutritional status and hydration."),
    ("F-0693", "Tube Feeding Management/Restore Eating Skills", "Use enteral feeding only when clinically indicated and restore eating skills when possible."),
    ("F-0694", "Parenteral/IV Fluids", "Provide parenteral fluids consistent with professional standards."),
    ("F-0695", "Respiratory/Tracheostomy Care and Suctioning", "Provide respiratory, tracheostomy and suctioning care as needed."),
    ("F-0697", "Pain Management", "Provide pain management consistent with professional standards and resident goals."),
    ("F-0698", "Dialysis", "Provide dialysis services consistent with professional standards."),
    ("F-0699", "Trauma Informed Care", "Provide culturally competent, trauma-informed care."),
    ("F-0700", "Bedrails", "Attempt alternatives and obtain consent before installing bed rails."),
];

const PHYSICIAN_SERVICES: &[Row] = &[
    ("F-0710", "Resident's Care Supervised by a Physician", "Ensure each resident's medical care is supervised by a physician."),
    ("F-0711", "Physician Visits - Review Care/Notes/Orders", "Have the physician review the total program of care at each visit."),
    ("F-0712", "Physician Visits - Frequency/Timeliness/Alternate NPPs", "Have the resident seen by a physician at required intervals."),
    ("F-0713", "Physician for Emergency Care, Available 24 Hours", "Provide or arrange physician services 24 hours a day for emergencies."),
    ("F-0714", "Physician Delegation of Tasks to NPP", "Limit physician delegation to qualified non-physician practitioners."),
    ("F-0715", "Physician Delegation to Dietitian/Therapist", "Limit delegation of dietary and therapy orders to qualified professionals."),
];

const NURSING_SERVICES: &[Row] = &[
    ("F-0725", "Sufficient Nursing Staff", "Provide sufficient nursing staff to meet resident needs."),
    ("F-0726", "Competent Nursing Staff", "Ensure nursing staff have the competencies and skills to care for residents."),
    ("F-0727", "RN 8 Hrs/7 days/Wk, Full Time DON", "Use an RN at least 8 consecutive hours a day, 7 days a week, and a full-time director of nursing."),
    ("F-0728", "Facility Hiring and Use of Nurse Aides", "Employ nurse aides only when they complete training and competency evaluation."),
    ("F-0729", "Registry Verification", "Verify the nurse aide registry before allowing an individual to serve as a nurse aide."),
    ("F-0730", "Nurse Aide Performance Review-12Hr/Yr In-Service", "Review nurse aide performance annually and provide 12 hours of in-service training."),
    ("F-0731", "Waiver-Licensed Nurses 24Hr/Day and RN Coverage", "Meet the conditions of any waiver of licensed nurse or RN requirements."),
    ("F-0732", "Posted Nurse Staffing Information", "Post daily nurse staffing data and retain it for 18 months."),
];

const BEHAVIORAL_HEALTH: &[Row] = &[
    ("F-0740", "Behavioral Health Services", "Provide behavioral health care to attain the highest practicable well-being."),
    ("F-0741", "Sufficient/Competent Staff-Behavioral Health Needs", "Have staff with the competencies to meet residents' behavioral health needs."),
    ("F-0742", "Treatment/Services for Mental/Psychosocial Concerns", "Provide treatment for residents who display mental or psychosocial difficulties."),
    ("F-0743", "No Pattern of Behavioral Difficulties Unless Unavoidable", "Prevent the development of behavioral difficulties unless clinically unavoidable."),
    ("F-0744", "Treatment/Service for Dementia", "Provide dementia treatment and services to attain the highest practicable well-being."),
    ("F-0745", "Provision of Medically Related Social Services", "Provide medically related social services for each resident."),
];

const PHARMACY_SERVICES: &[Row] = &[
    ("F-0755", "Pharmacy Services/Procedures/Pharmacist/Records", "Provide pharmaceutical services and records of controlled drug receipt and disposition."),
    ("F-0756", "Drug Regimen Review, Report Irregular, Act On", "Have a pharmacist review each drug regimen monthly and act on irregularities."),
    ("F-0757", "Drug Regimen is Free from Unnecessary Drugs", "Keep each drug regimen free from unnecessary drugs."),
    ("F-0758", "Free from Unnecessary Psychotropic Meds/PRN Use", "Limit psychotropic drugs and PRN orders to documented clinical need."),
    ("F-0759", "Free of Medication Error Rates of 5% or More", "Keep medication error rates below five percent."),
    ("F-0760", "Residents are Free of Significant Med Errors", "Keep residents free of significant medication errors."),
    ("F-0761", "Label/Store Drugs and Biologicals", "Label and store drugs and biologicals under proper temperature and security controls."),
];

const DIAGNOSTIC_SERVICES: &[Row] = &[
    ("F-0770", "Laboratory Services", "Provide or obtain laboratory services to meet resident needs."),
    ("F-0771", "Blood Bank and Transfusion Services", "Meet requirements when providing blood bank and transfusion services."),
    ("F-0772", "Lab Services Not Provided On-Site", "Obtain laboratory services from a certified laboratory when not provided on-site."),
    ("F-0773", "Lab Services Physician Order/Notify of Results", "Obtain lab services only on order and promptly notify the ordering practitioner of results."),
    ("F-0774", "Assist with Transport Arrangements to Lab Services", "Assist residents with transportation to laboratory services."),
    ("F-0775", "Lab Reports in Record-Lab Name/Address", "File signed and dated laboratory reports in the clinical record."),
    ("F-0776", "Radiology/Other Diagnostic Services", "Provide or obtain radiology and other diagnostic services."),
    ("F-0777", "Radiology/Diagnostic Services Ordered/Notify Results", "Obtain radiology services only on order and promptly notify the practitioner of results."),
    ("F-0778", "Assist with Transport Arrangements to Radiology", "Assist residents with transportation to radiology services."),
    ("F-0779", "X-Ray/Diagnostic Report in Record-Signed/Dated", "File signed and dated diagnostic reports in the clinical record."),
];

const DENTAL_SERVICES: &[Row] = &[
    ("F-0790", "Routine/Emergency Dental Services in SNFs", "Assist residents in obtaining routine and emergency dental care."),
    ("F-0791", "Routine/Emergency Dental Services in NFs", "Provide or obtain dental services and refer residents with lost or damaged dentures."),
];

const FOOD_NUTRITION: &[Row] = &[
    ("F-0800", "Provided Diet Meets Needs of Each Resident", "Provide a nourishing, palatable diet that meets each resident's needs."),
    ("F-0801", "Qualified Dietary Staff", "Employ a qualified dietitian or director of food and nutrition services."),
    ("F-0802", "Sufficient Dietary Support Personnel", "Employ sufficient competent support staff for food and nutrition services."),
    ("F-0803", "Menus Meet Resident Needs/Prep in Advance/Followed", "Plan menus in advance that meet nutritional needs and follow them."),
    ("F-0804", "Nutritive Value/Appearance, Palatable/Preferred Temp", "Serve food that conserves nutritive value and is palatable at a safe temperature."),
    ("F-0805", "Food in Form to Meet Individual Needs", "Prepare food in a form designed to meet individual needs."),
    ("F-0806", "Resident Allergies, Preferences, Substitutes", "Accommodate allergies, intolerances and preferences with appealing substitutes."),
    ("F-0807", "Drinks Available to Meet Needs/Preferences/Hydration", "Provide drinks consistent with resident needs and preferences to maintain hydration."),
    ("F-0808", "Therapeutic Diet Prescribed by Physician", "Provide therapeutic diets as prescribed."),
    ("F-0809", "Frequency of Meals/Snacks at Bedtime", "Provide at least three meals daily with no more than 14 hours between dinner and breakfast."),
    ("F-0810", "Assistive Devices - Eating Equipment/Utensils", "Provide special eating equipment and utensils for residents who need them."),
    ("F-0811", "Feeding Assistant - Training/Supervision/Resident", "Use trained and supervised paid feeding assistants for appropriate residents only."),
    ("F-0812", "Food Procurement, Store/Prepare/Serve-Sanitary", "Store, prepare, distribute and serve food under sanitary conditions."),
    ("F-0813", "Personal Food Policy", "Maintain a policy on food brought to residents by family and visitors."),
    ("F-0814", "Dispose Garbage and Refuse Properly", "Dispose of garbage and refuse properly."),
];

const REHABILITATION: &[Row] = &[
    ("F-0825", "Provide/Obtain Specialized Rehab Services", "Provide or obtain specialized rehabilitative services required by the care plan."),
    ("F-0826", "Rehab Services - Physician Order/Qualified Person", "Provide rehabilitative services under a written order by qualified personnel."),
];

const ADMINISTRATION: &[Row] = &[
    ("F-0835", "Administration", "Administer the facility so resources are used effectively and efficiently."),
    ("F-0836", "License/Comply with Fed/State/Local Law/Prof Std", "Be licensed and operate in compliance with applicable laws and standards."),
    ("F-0837", "Governing Body", "Have a governing body legally responsible for policies and operations."),
    ("F-0838", "Facility Assessment", "Conduct and maintain a facility-wide assessment of resources needed to care for residents."),
    ("F-0839", "Staff Qualifications", "Employ professional staff who are licensed, certified or registered as required."),
    ("F-0840", "Use of Outside Resources", "Obtain services from outside resources under written agreements."),
    ("F-0841", "Responsibilities of Medical Director", "Designate a physician as medical director responsible for care policies."),
    ("F-0842", "Resident Records - Identifiable Information", "Maintain complete, accurate and accessible medical records."),
    ("F-0843", "Transfer Agreement", "Have a written transfer agreement with one or more hospitals."),
    ("F-0844", "Disclosure of Ownership Requirements", "Disclose ownership and management changes to the state agency."),
    ("F-0845", "Facility Closure - Administrator", "Give written notice and ensure orderly relocation before facility closure."),
    ("F-0846", "Facility Closure", "Maintain policies for the administrator's duties in the event of closure."),
    ("F-0849", "Hospice Services", "Coordinate care with hospice providers under a written agreement."),
    ("F-0850", "Qualifications of Social Worker >120 Beds", "Employ a qualified full-time social worker in facilities with more than 120 beds."),
    ("F-0851", "Payroll Based Journal", "Electronically submit complete and accurate direct care staffing information."),
];

const QAPI: &[Row] = &[
    ("F-0865", "QAPI Program/Plan, Disclosure/Good Faith Attempt", "Develop and maintain an effective quality assurance and performance improvement program."),
    ("F-0867", "QAPI/QAA Improvement Activities", "Set priorities for and track performance improvement activities."),
    ("F-0868", "QAA Committee", "Maintain a quality assessment and assurance committee with required members."),
];

const INFECTION_CONTROL: &[Row] = &[
    ("F-0880", "Infection Prevention & Control", "Establish and maintain an infection prevention and control program to prevent transmission of disease."),
    ("F-0881", "Antibiotic Stewardship Program", "Implement antibiotic use protocols and a system to monitor antibiotic use."),
    ("F-0882", "Infection Preventionist Qualifications/Role", "Designate a qualified infection preventionist responsible for the program."),
    ("F-0883", "Influenza and Pneumococcal Immunizations", "Offer influenza and pneumococcal immunizations with education and documentation."),
    ("F-0884", "Reporting - National Healthcare Safety Network", "Report required infection and vaccination data to the national surveillance network."),
    ("F-0885", "Reporting - Residents, Representatives & Families", "Inform residents and families of confirmed or suspected communicable disease cases."),
    ("F-0886", "COVID-19 Testing - Residents & Staff", "Test residents and staff for COVID-19 as required."),
    ("F-0887", "COVID-19 Immunization", "Educate about and offer COVID-19 vaccination to residents and staff."),
    ("F-0888", "COVID-19 Vaccination of Facility Staff", "Maintain policies to ensure staff are vaccinated against COVID-19."),
];

const COMPLIANCE_ETHICS: &[Row] = &[
    ("F-0895", "Compliance and Ethics Program", "Operate a compliance and ethics program that prevents and detects violations."),
];

const PHYSICAL_ENVIRONMENT: &[Row] = &[
    ("F-0906", "Emergency Electrical Power System", "Provide an emergency electrical power system for essential services."),
    ("F-0907", "Space and Equipment", "Provide sufficient space and equipment in dining, health services and activity areas."),
    ("F-0908", "Essential Equipment, Safe Operating Condition", "Maintain essential equipment in safe operating condition."),
    ("F-0909", "Resident Bed", "Inspect beds, mattresses and rails regularly to identify entrapment risks."),
    ("F-0910", "Resident Room", "Design and equip resident rooms for adequate nursing care, comfort and privacy."),
    ("F-0911", "Bedroom Number of Residents", "Accommodate no more than four residents per bedroom."),
    ("F-0912", "Bedrooms Measure at Least 80 Square Ft/Resident", "Provide at least 80 square feet per resident in multiple-resident rooms."),
    ("F-0913", "Bedrooms Have Direct Access to Exit Corridor", "Provide bedrooms with direct access to an exit corridor."),
    ("F-0914", "Bedrooms Assure Full Visual Privacy", "Equip bedrooms to assure full visual privacy for each resident."),
    ("F-0915", "Resident Room Window", "Provide at least one window to the outside in each resident room."),
    ("F-0916", "Resident Room Floor Above Grade", "Keep resident room floors at or above grade level."),
    ("F-0917", "Resident Room Bed/Furniture/Closet", "Furnish each resident with a bed, bedding, furniture and closet space."),
    ("F-0918", "Bedrooms Equipped/Near Lavatory/Toilet", "Equip bedrooms with or near lavatory and toilet facilities."),
    ("F-0919", "Resident Call System", "Equip rooms and bathing facilities with a communication system to staff."),
    ("F-0920", "Requirements for Dining and Activity Rooms", "Provide well-lit, ventilated dining and activity rooms of sufficient size."),
    ("F-0921", "Safe/Functional/Sanitary/Comfortable Environment", "Maintain a safe, functional, sanitary and comfortable environment."),
    ("F-0922", "Procedures to Ensure Water Availability", "Have procedures to ensure water is available in an interruption of normal supply."),
    ("F-0923", "Ventilation", "Provide adequate outside ventilation."),
    ("F-0924", "Corridors Have Firmly Secured Handrails", "Equip corridors with firmly secured handrails on each side."),
    ("F-0925", "Maintains Effective Pest Control Program", "Maintain an effective pest control program."),
    ("F-0926", "Smoking Policies", "Establish and follow policies on smoking, including safety for non-smokers."),
];

const TRAINING: &[Row] = &[
    ("F-0940", "Training Requirements - General", "Develop and maintain a training program for staff, contractors and volunteers."),
    ("F-0941", "Communication Training", "Train staff on effective communications for direct care."),
    ("F-0942", "Resident's Rights Training", "Train staff on resident rights and facility responsibilities."),
    ("F-0943", "Abuse, Neglect, and Exploitation Training", "Train staff on preventing, recognizing and reporting abuse and neglect."),
    ("F-0944", "QAPI Training", "Train staff on the quality assurance and performance improvement program."),
    ("F-0945", "Infection Control Training", "Train staff on infection prevention and control standards."),
    ("F-0946", "Compliance and Ethics Training", "Train staff on the compliance and ethics program."),
    ("F-0947", "Required In-Service Training for Nurse Aides", "Provide at least 12 hours of annual in-service training for nurse aides."),
    ("F-0948", "Training for Feeding Assistants", "Use only feeding assistants who completed a state-approved training course."),
    ("F-0949", "Behavioral Health Training", "Train staff on behavioral health care and services."),
];

const EMERGENCY_PREPAREDNESS: &[Row] = &[
    ("E-0001", "Establishment of the Emergency Program", "Establish and maintain a comprehensive emergency preparedness program."),
    ("E-0004", "Develop and Maintain EP Program", "Develop an emergency plan and review it at least annually."),
    ("E-0006", "Plan Based on All Hazards Risk Assessment", "Base the emergency plan on a facility-based and community-based all-hazards risk assessment."),
    ("E-0007", "EP Program Patient Population", "Address the patient population and services the facility can provide in an emergency."),
    ("E-0009", "Local, State, Tribal Collaboration Process", "Cooperate with emergency preparedness officials on an integrated response."),
    ("E-0013", "Development of EP Policies and Procedures", "Develop emergency policies and procedures based on the risk assessment."),
    ("E-0015", "Subsistence Needs for Staff and Patients", "Provide food, water, medical supplies and power for staff and patients."),
    ("E-0018", "Procedures for Tracking of Staff and Patients", "Track the location of on-duty staff and sheltered patients during an emergency."),
    ("E-0020", "Policies for Evacuation and Primary/Alternate Communication", "Plan safe evacuation including transportation, staff duties and communication."),
    ("E-0022", "Policies/Procedures for Sheltering in Place", "Provide a means to shelter in place for patients and staff who remain."),
    ("E-0023", "Policies/Procedures for Medical Documentation", "Preserve patient information and keep medical records secure and available."),
    ("E-0024", "Policies/Procedures - Volunteers and Staffing", "Use volunteers and other staffing strategies during an emergency."),
    ("E-0025", "Arrangement with Other Facilities", "Arrange with other facilities to receive patients in an emergency."),
    ("E-0026", "Roles Under a Waiver Declared by Secretary", "Define the facility's role in providing care at alternate care sites."),
    ("E-0029", "Development of Communication Plan", "Develop and maintain an emergency communication plan."),
    ("E-0030", "Names and Contact Information", "Maintain contact information for staff, physicians and other facilities."),
    ("E-0031", "Emergency Officials Contact Information", "Maintain contact information for emergency preparedness officials."),
    ("E-0032", "Primary/Alternate Means for Communication", "Provide primary and alternate means of communication with staff and officials."),
    ("E-0033", "Methods for Sharing Information", "Share patient information with other providers and officials during an evacuation."),
    ("E-0034", "Information on Occupancy/Needs", "Provide information about occupancy and needs to the incident command center."),
    ("E-0035", "LTC and ICF/IID Sharing Plan with Patients", "Share emergency plan information with residents and families."),
    ("E-0036", "EP Training and Testing", "Develop and maintain an emergency preparedness training and testing program."),
    ("E-0037", "EP Training Program", "Provide initial and annual emergency preparedness training to staff."),
    ("E-0039", "EP Testing Requirements", "Conduct exercises to test the emergency plan at least twice a year."),
    ("E-0041", "Hospital CAH and LTC Emergency Power", "Maintain emergency and standby power systems and fuel plans."),
    ("E-0042", "Integrated Healthcare Systems", "Meet requirements when participating in an integrated healthcare system program."),
];

const LIFE_SAFETY: &[Row] = &[
    ("K-0100", "General Requirements - Other", "Meet general life safety code requirements not otherwise listed."),
    ("K-0111", "Building Rehabilitation", "Meet requirements for rehabilitation work on existing buildings."),
    ("K-0131", "Multiple Occupancies", "Separate or protect areas of differing occupancy classification."),
    ("K-0161", "Building Construction Type and Height", "Meet construction type requirements for building height and stories."),
    ("K-0200", "Means of Egress Requirements - Other", "Meet means of egress requirements not otherwise listed."),
    ("K-0211", "Means of Egress - General", "Keep means of egress continuously maintained and free of obstructions."),
    ("K-0222", "Egress Doors", "Ensure egress doors are not locked against egress except as permitted."),
    ("K-0223", "Doors with Self-Closing Devices", "Keep doors with hold-open devices arranged to close automatically."),
    ("K-0225", "Stairways and Smokeproof Enclosures", "Enclose exit stairs and protect smokeproof enclosures."),
    ("K-0226", "Horizontal Exits", "Construct horizontal exits with rated walls and doors."),
    ("K-0227", "Ramps", "Build ramps with the required slope, landings and guards."),
    ("K-0232", "Aisle, Corridor, or Ramp Width", "Maintain minimum width of aisles, corridors and ramps."),
    ("K-0241", "Number of Exits - Story and Compartment", "Provide at least two remote exits from each story and smoke compartment."),
    ("K-0271", "Discharge from Exits", "Arrange exit discharge to lead to a public way."),
    ("K-0281", "Illumination of Means of Egress", "Continuously illuminate means of egress."),
    ("K-0291", "Emergency Lighting", "Provide and test emergency lighting for at least 1.5 hours."),
    ("K-0293", "Exit Signage", "Mark exits and access to exits with approved signs."),
    ("K-0300", "Protection - Other", "Meet fire protection requirements not otherwise listed."),
    ("K-0311", "Vertical Openings - Enclosure", "Enclose stairways, shafts and other vertical openings."),
    ("K-0321", "Hazardous Areas - Enclosure", "Protect hazardous areas with fire barriers or sprinklers."),
    ("K-0322", "Laboratories", "Protect laboratories using flammable materials as hazardous areas."),
    ("K-0323", "Anesthetizing Locations", "Meet fire protection requirements for anesthetizing locations."),
    ("K-0324", "Cooking Facilities", "Protect cooking operations with approved hood and suppression systems."),
    ("K-0325", "Alcohol Based Hand Rub Dispenser (ABHR)", "Install alcohol-based hand rub dispensers per location and volume limits."),
    ("K-0331", "Interior Wall and Ceiling Finish", "Use interior wall and ceiling finishes with required flame spread ratings."),
    ("K-0332", "Interior Floor Finish", "Use interior floor finish with the required critical radiant flux rating."),
    ("K-0341", "Fire Alarm System - Installation", "Install a fire alarm system meeting code requirements."),
    ("K-0342", "Fire Alarm System - Initiation", "Initiate the fire alarm by manual and automatic means."),
    ("K-0344", "Fire Alarm System - Notification", "Provide occupant and fire department notification on alarm."),
    ("K-0345", "Fire Alarm System - Testing and Maintenance", "Test and maintain the fire alarm system and keep records."),
    ("K-0346", "Fire Alarm System - Out of Service", "Implement a fire watch or evacuation when the alarm is out of service."),
    ("K-0351", "Sprinkler System - Installation", "Protect the building with a complete automatic sprinkler system."),
    ("K-0353", "Sprinkler System - Maintenance and Testing", "Inspect, test and maintain sprinkler systems and keep records."),
    ("K-0354", "Sprinkler System - Out of Service", "Implement a fire watch or evacuation when sprinklers are out of service."),
    ("K-0355", "Portable Fire Extinguishers", "Install, inspect and maintain portable fire extinguishers."),
    ("K-0361", "Corridors - Areas Open to Corridors", "Limit spaces open to corridors to permitted uses with smoke detection or supervision."),
    ("K-0362", "Corridors - Construction of Walls", "Separate corridors from other spaces by walls meeting code."),
    ("K-0363", "Corridor - Doors", "Ensure corridor doors resist smoke passage and latch properly."),
    ("K-0364", "Corridor - Openings", "Limit transfer grilles and other openings in corridor walls and doors."),
    ("K-0372", "Subdivision of Building Spaces - Smoke Barrier Construction", "Construct smoke barriers with required fire resistance."),
    ("K-0374", "Subdivision of Building Spaces - Smoke Barrier Doors", "Equip smoke barrier doors to close and resist smoke passage."),
    ("K-0379", "Subdivision of Building Spaces - Smoke Compartments", "Limit smoke compartment size and travel distance."),
    ("K-0500", "Building Services - Other", "Meet building service requirements not otherwise listed."),
    ("K-0511", "Utilities - Gas and Electric", "Install utilities in accordance with applicable codes."),
    ("K-0521", "HVAC", "Install and maintain heating, ventilating and air conditioning systems."),
    ("K-0531", "Elevators", "Install, test and maintain elevators in accordance with code."),
    ("K-0541", "Rubbish Chutes, Incinerators, and Laundry Chutes", "Enclose and protect rubbish and laundry chutes."),
    ("K-0700", "Operating Features - Other", "Meet operating feature requirements not otherwise listed."),
    ("K-0711", "Evacuation and Relocation Plan", "Maintain a written fire safety plan for evacuation and relocation."),
    ("K-0712", "Fire Drills", "Conduct fire drills quarterly on each shift."),
    ("K-0741", "Smoking Regulations", "Establish and enforce smoking regulations."),
    ("K-0751", "Draperies, Curtains, and Loosely Hanging Fabrics", "Use flame-retardant draperies, curtains and hanging fabrics."),
    ("K-0752", "Upholstered Furniture and Mattresses", "Use upholstered furniture and mattresses meeting fire resistance criteria."),
    ("K-0753", "Combustible Decorations", "Limit combustible decorations to permitted quantities."),
    ("K-0754", "Soiled Linen and Trash Containers", "Limit the size of soiled linen and trash containers."),
    ("K-0761", "Maintenance, Inspection & Testing - Doors", "Inspect and test fire doors annually."),
    ("K-0781", "Portable Space Heaters", "Restrict portable space heaters to permitted types and locations."),
    ("K-0900", "Health Care Facilities Code - Other", "Meet health care facilities code requirements not otherwise listed."),
    ("K-0901", "Fundamentals - Building System Categories", "Categorize building systems by risk to patients."),
    ("K-0905", "Electrical Systems - Receptacles", "Install and test receptacles in patient care areas."),
    ("K-0907", "Gas and Vacuum Piped Systems - Maintenance Program", "Maintain medical gas and vacuum systems with inspection records."),
    ("K-0911", "Electrical Systems - Other", "Meet electrical system requirements not otherwise listed."),
    ("K-0914", "Electrical Systems - Maintenance and Testing", "Test hospital-grade receptacles and line isolation monitors."),
    ("K-0915", "Electrical Systems - Essential Electric System Categories", "Provide an essential electrical system of the required category."),
    ("K-0916", "Electrical Systems - Essential Electric System Alarm Annunciator", "Provide a remote annunciator for the essential electrical system."),
    ("K-0918", "Electrical Systems - Essential Electric System Maintenance and Testing", "Test generators monthly under load and keep records."),
    ("K-0920", "Electrical Equipment - Power Cords and Extension Cords", "Restrict power strips and extension cords in patient care areas."),
    ("K-0921", "Electrical Equipment - Testing and Maintenance Requirements", "Test and maintain patient care electrical equipment."),
    ("K-0923", "Gas Equipment - Cylinder and Container Storage", "Store medical gas cylinders in approved locations with required separation."),
    ("K-0925", "Gas Equipment - Respiratory Therapy Sources of Ignition", "Keep sources of ignition away from respiratory therapy equipment."),
    ("K-0930", "Gas Equipment - Liquid Oxygen Equipment", "Store and transfill liquid oxygen in approved areas."),
];

// F-tags numbered before the November 2017 renumbering. Historical survey
// data still carries them.

const LEGACY_RESIDENT_RIGHTS: &[Row] = &[
    ("F-0150", "Resident Rights", "Honor the resident's right to a dignified existence and self-determination."),
    ("F-0151", "Exercise Rights - Free of Interference", "Let the resident exercise rights as a citizen free of interference, coercion or reprisal."),
    ("F-0152", "Rights Exercised by Representative", "Let a legally appointed representative exercise rights on behalf of an incompetent resident."),
    ("F-0153", "Right to Access/Purchase Copies of Records", "Provide access to and copies of the resident's records within required time frames."),
    ("F-0154", "Informed of All Treatment and Changes", "Inform the resident in advance about care, treatment and changes that may affect well-being."),
    ("F-0155", "Right to Refuse; Formulate Advance Directives", "Honor refusal of treatment and the right to formulate advance directives."),
    ("F-0156", "Notice of Rights and Services", "Inform the resident of rights, services and charges orally and in writing."),
    ("F-0157", "Notify of Changes (Injury/Decline/Room, etc.)", "Notify the resident, physician and representative of accidents, significant changes and transfers."),
    ("F-0158", "Right to Manage Financial Affairs", "Let the resident manage their own financial affairs."),
    ("F-0159", "Facility Management of Personal Funds", "Hold, safeguard and account for resident funds deposited with the facility."),
    ("F-0160", "Conveyance of Funds upon Death", "Convey a deceased resident's funds and final accounting promptly."),
    ("F-0161", "Assurance of Financial Security", "Purchase a surety bond or otherwise assure the security of resident funds."),
    ("F-0162", "Limitations on Charges to Personal Funds", "Charge personal funds only for items and services not covered by Medicare or Medicaid."),
    ("F-0163", "Right to Choose a Personal Attending Physician", "Let the resident choose a personal attending physician."),
    ("F-0164", "Personal Privacy/Confidentiality of Records", "Provide personal privacy and keep personal and clinical records confidential."),
    ("F-0165", "Right to Voice Grievances", "Let the resident voice grievances without discrimination or reprisal."),
    ("F-0166", "Right to Prompt Efforts to Resolve Grievances", "Make prompt efforts to resolve resident grievances."),
    ("F-0167", "Right to Survey Results - Readily Accessible", "Make the most recent survey results readily accessible to residents."),
    ("F-0168", "Right to Receive Information from Agencies", "Let the resident receive information from client advocate agencies."),
    ("F-0169", "Right to Perform Services for Facility", "Let the resident choose whether to perform services for the facility."),
    ("F-0170", "Right to Privacy in Sending/Receiving Mail", "Deliver and send the resident's mail promptly and unopened."),
    ("F-0171", "Access to Stationery, Postage and Writing Implements", "Provide access to stationery, postage and writing implements at the resident's cost."),
    ("F-0172", "Access and Visitation Rights", "Provide immediate access to the resident for officials, physicians, ombudsmen and family."),
    ("F-0173", "Ombudsman Access to Clinical Records", "Allow the ombudsman to examine clinical records with the resident's permission."),
    ("F-0174", "Right to Have Access to Telephone", "Provide access to a telephone where calls can be made without being overheard."),
    ("F-0175", "Married Couples Share Room", "Let married residents share a room when both consent."),
    ("F-0176", "Resident Self-Administer Drugs if Deemed Safe", "Permit self-administration of drugs when the interdisciplinary team finds it safe."),
    ("F-0177", "Refusal of Certain Transfers", "Honor a resident's refusal of transfers made for staff convenience."),
];

const LEGACY_ADMISSION_TRANSFER_DISCHARGE: &[Row] = &[
    ("F-0201", "Reasons for Transfer/Discharge", "Transfer or discharge only for the permitted reasons."),
    ("F-0202", "Documentation for Transfer/Discharge", "Document the reason for transfer or discharge in the clinical record."),
    ("F-0203", "Notice Requirements before Transfer/Discharge", "Give written notice with required content and timing before transfer or discharge."),
    ("F-0204", "Preparation for Safe Transfer/Discharge", "Prepare and orient the resident for a safe and orderly transfer or discharge."),
    ("F-0205", "Notice of Bed-Hold Policy before/upon Transfer", "Provide the bed-hold policy before and at the time of transfer."),
    ("F-0206", "Policy to Permit Return after Hospitalization", "Readmit a Medicaid resident to the first available bed after hospitalization."),
    ("F-0207", "Equal Access to Quality Care", "Provide equal access to quality care regardless of payment source."),
    ("F-0208", "Admissions Policy", "Follow admission policies that do not require waivers or third-party guarantees."),
];

const LEGACY_ABUSE_RESTRAINTS: &[Row] = &[
    ("F-0221", "Right to be Free from Physical Restraints", "Use physical restraints only to treat medical symptoms, never for discipline or convenience."),
    ("F-0222", "Right to be Free from Chemical Restraints", "Use psychoactive drugs only to treat medical symptoms, never for discipline or convenience."),
    ("F-0223", "Free from Abuse/Involuntary Seclusion", "Keep residents free from verbal, sexual, physical and mental abuse and involuntary seclusion."),
    ("F-0224", "Prohibit Mistreatment/Neglect/Misappropriation", "Prohibit mistreatment, neglect and misappropriation of resident property."),
    ("F-0225", "Investigate/Report Allegations/Individuals", "Report and thoroughly investigate alleged violations and screen staff for prior findings."),
    ("F-0226", "Develop/Implement Abuse/Neglect Policies", "Develop and implement policies that prohibit abuse, neglect and misappropriation."),
];

const LEGACY_QUALITY_OF_LIFE: &[Row] = &[
    ("F-0240", "Care and Environment Promotes Quality of Life", "Provide care in a manner and environment that maintains or enhances quality of life."),
    ("F-0241", "Dignity and Respect of Individuality", "Promote care that maintains dignity and respect for each resident."),
    ("F-0242", "Self-Determination - Right to Make Choices", "Let the resident choose activities, schedules and health care."),
    ("F-0243", "Participation in Resident/Family Groups", "Let the resident organize and participate in resident groups."),
    ("F-0244", "Facility Response to Group Grievances", "Act on grievances and recommendations of resident and family groups."),
    ("F-0245", "Participation in Other Activities", "Let the resident participate in social, religious and community activities."),
    ("F-0246", "Reasonable Accommodation of Needs/Preferences", "Reasonably accommodate individual needs and preferences."),
    ("F-0247", "Notice before Room/Roommate Change", "Give notice before a change in room or roommate."),
    ("F-0248", "Activities Meet Interests/Needs of Each Resident", "Provide an ongoing activity program directed to each resident's interests."),
    ("F-0249", "Qualifications of Activity Professional", "Direct the activity program by a qualified professional."),
    ("F-0250", "Provision of Medically Related Social Services", "Provide medically related social services to attain the highest practicable well-being."),
    ("F-0251", "Qualifications of Social Worker >120 Beds", "Employ a qualified full-time social worker when licensed for more than 120 beds."),
    ("F-0252", "Safe/Clean/Comfortable/Homelike Environment", "Provide a safe, clean, comfortable and homelike environment."),
    ("F-0253", "Housekeeping and Maintenance Services", "Provide housekeeping and maintenance services for a sanitary, orderly interior."),
    ("F-0254", "Clean Bed and Bath Linens in Good Condition", "Provide clean bed and bath linens in good condition."),
    ("F-0255", "Private Closet Space", "Provide private closet space in each resident room."),
    ("F-0256", "Adequate and Comfortable Lighting Levels", "Provide adequate and comfortable lighting levels in all areas."),
    ("F-0257", "Comfortable and Safe Temperature Levels", "Maintain comfortable and safe temperature levels."),
    ("F-0258", "Maintenance of Comfortable Sound Levels", "Maintain comfortable sound levels."),
];

const LEGACY_RESIDENT_ASSESSMENT: &[Row] = &[
    ("F-0271", "Admission Physician Orders for Immediate Care", "Obtain physician orders for the resident's immediate care at admission."),
    ("F-0272", "Comprehensive Assessments", "Conduct a comprehensive, accurate, standardized assessment of functional capacity."),
    ("F-0273", "Assessment within 14 Days after Admission", "Complete the comprehensive assessment within 14 days after admission."),
    ("F-0274", "Comprehensive Assessment after Significant Change", "Reassess within 14 days after a significant change in condition."),
    ("F-0275", "Comprehensive Assessment at Least Every 12 Months", "Complete a comprehensive assessment at least every 12 months."),
    ("F-0276", "Quarterly Assessment at Least Every 3 Months", "Complete a quarterly review assessment at least every 3 months."),
    ("F-0278", "Assessment Accuracy/Coordination/Certified", "Ensure assessments are accurate, coordinated and certified by a registered nurse."),
    ("F-0279", "Develop Comprehensive Care Plans", "Develop a comprehensive care plan with measurable objectives and timetables."),
    ("F-0280", "Right to Participate in Planning Care - Revise Care Plan", "Involve the resident in care planning and revise the plan after each assessment."),
    ("F-0281", "Services Provided Meet Professional Standards", "Provide services that meet professional standards of quality."),
    ("F-0282", "Services by Qualified Persons/per Care Plan", "Provide services by qualified persons in accordance with the care plan."),
    ("F-0283", "Anticipate Discharge: Recapitulation of Stay", "Prepare a recapitulation of the resident's stay before discharge."),
    ("F-0284", "Anticipate Discharge: Post-Discharge Plan", "Develop a post-discharge plan of care with the resident."),
    ("F-0285", "PASRR Requirements for MI and MR", "Screen residents with mental illness or intellectual disability before admission."),
    ("F-0286", "Maintain 15 Months of Resident Assessments", "Keep 15 months of assessments in the active clinical record."),
    ("F-0287", "Encoding/Transmitting Resident Assessments", "Encode and electronically transmit assessments within required time frames."),
];

const LEGACY_QUALITY_OF_CARE: &[Row] = &[
    ("F-0309", "Provide Care/Services for Highest Well-Being", "Provide care and services to attain or maintain the highest practicable well-being."),
    ("F-0310", "ADLs Do Not Decline unless Unavoidable", "Prevent decline in activities of daily living unless clinically unavoidable."),
    ("F-0311", "Treatment/Services to Improve/Maintain ADLs", "Provide treatment and services to improve or maintain activities of daily living."),
    ("F-0312", "ADL Care Provided for Dependent Residents", "Provide grooming, hygiene and nutrition help to residents unable to do so themselves."),
    ("F-0313", "Treatment/Devices to Maintain Hearing/Vision", "Provide treatment and assistive devices to maintain vision and hearing."),
    ("F-0314", "Treatment/Services to Prevent/Heal Pressure Sores", "Prevent pressure sores and provide treatment to promote healing."),
    ("F-0315", "No Catheter, Prevent UTI, Restore Bladder", "Avoid unnecessary catheters, prevent infection and restore bladder function."),
    ("F-0317", "No Reduction in ROM unless Unavoidable", "Prevent reduction in range of motion unless clinically unavoidable."),
    ("F-0318", "Increase/Prevent Decrease in ROM/Mobility", "Provide treatment to increase or prevent decrease in range of motion."),
    ("F-0319", "Treatment/Services for Mental/Psychosocial Concerns", "Treat mental or psychosocial adjustment difficulties."),
    ("F-0320", "No Pattern of Behavioral Difficulties unless Unavoidable", "Prevent patterns of decreased social interaction or increased withdrawn, angry or depressive behaviors."),
    ("F-0321", "No NG Tube unless Unavoidable", "Avoid naso-gastric tubes unless the clinical condition makes them unavoidable."),
    ("F-0322", "NG Treatment/Services - Restore Eating Skills", "Provide tube feeding care that prevents complications and restores eating skills."),
    ("F-0323", "Free of Accident Hazards/Supervision/Devices", "Keep the environment free of accident hazards and provide adequate supervision and devices."),
    ("F-0325", "Maintain Nutrition Status unless Unavoidable", "Maintain acceptable parameters of nutritional status such as body weight and protein levels."),
    ("F-0327", "Sufficient Fluid to Maintain Hydration", "Provide sufficient fluid intake to maintain proper hydration."),
    ("F-0328", "Treatment/Care for Special Needs", "Provide proper treatment for injections, ostomy, tracheostomy, suctioning and other special needs."),
    ("F-0329", "Drug Regimen is Free from Unnecessary Drugs", "Keep each resident's drug regimen free from unnecessary drugs."),
    ("F-0332", "Free of Medication Error Rates of 5% or More", "Keep medication error rates below 5 percent."),
    ("F-0333", "Residents Free of Significant Medication Errors", "Keep residents free of any significant medication errors."),
    ("F-0334", "Influenza and Pneumococcal Immunizations", "Offer, educate about and document influenza and pneumococcal immunizations."),
];

const LEGACY_NURSING_SERVICES: &[Row] = &[
    ("F-0353", "Sufficient 24-Hr Nursing Staff per Care Plans", "Provide sufficient nursing staff around the clock to meet care plan needs."),
    ("F-0354", "Waiver - RN 8 Hrs/7 Days/Wk, Full-Time DON", "Use a registered nurse 8 hours a day, 7 days a week and a full-time director of nursing unless waived."),
    ("F-0355", "Waiver - Licensed Nurses 24 Hr/Day and RN Coverage", "Meet conditions for a waiver of licensed nurse and RN coverage requirements."),
    ("F-0356", "Posted Nurse Staffing Information", "Post daily nurse staffing data and keep it for 18 months."),
];

const LEGACY_DIETARY_SERVICES: &[Row] = &[
    ("F-0360", "Menus Meet Resident Nutritional Needs", "Provide a nourishing, palatable, well-balanced diet that meets daily nutritional needs."),
    ("F-0361", "Dietary Services - Sufficient Staff", "Employ a qualified dietitian or consult with one."),
    ("F-0362", "Sufficient Dietary Support Personnel", "Employ sufficient support personnel to carry out dietary services."),
    ("F-0363", "Menus Meet Needs/Prepared in Advance/Followed", "Prepare menus in advance, meet nutritional needs and follow them."),
    ("F-0364", "Nutritive Value/Appearance, Palatable/Proper Temperature", "Serve food that conserves nutritive value, is palatable and at the proper temperature."),
    ("F-0365", "Food in Form to Meet Individual Needs", "Prepare food in a form designed to meet individual needs."),
    ("F-0366", "Substitutes of Similar Nutritive Value", "Offer substitutes of similar nutritive value to residents who refuse food."),
    ("F-0367", "Therapeutic Diet Prescribed by Physician", "Provide therapeutic diets as prescribed by the attending physician."),
    ("F-0368", "Frequency of Meals/Snacks at Bedtime", "Offer at least three meals daily and nourishing snacks at bedtime."),
    ("F-0369", "Assistive Devices - Eating Equipment/Utensils", "Provide special eating equipment and utensils for residents who need them."),
    ("F-0371", "Food Procure, Store/Prepare/Serve - Sanitary", "Procure food from approved sources and store, prepare and serve it under sanitary conditions."),
    ("F-0372", "Dispose Garbage and Refuse Properly", "Dispose of garbage and refuse properly."),
    ("F-0373", "Paid Feeding Assistants", "Use only paid feeding assistants who completed a state-approved training course."),
];

const LEGACY_PHYSICIAN_SERVICES: &[Row] = &[
    ("F-0385", "Resident's Care Supervised by a Physician", "Ensure each resident's medical care is supervised by a physician."),
    ("F-0386", "Physician Visits - Review Care/Notes/Orders", "Have the physician review the total program of care, write notes and sign orders at each visit."),
    ("F-0387", "Frequency and Timeliness of Physician Visits", "Ensure physician visits at least every 30 days for 90 days, then every 60 days."),
    ("F-0388", "Physician Visits - Performed by Physician/NP/PA/CNS", "Ensure required visits are performed by the physician or permitted practitioners."),
    ("F-0389", "Availability of Physician for Emergency Care", "Provide or arrange physician services 24 hours a day in emergencies."),
    ("F-0390", "Physician Delegation of Tasks to NP/PA/CNS", "Delegate physician tasks only as permitted by state law."),
];

const LEGACY_REHABILITATION: &[Row] = &[
    ("F-0406", "Provide/Obtain Specialized Rehab Services", "Provide or obtain specialized rehabilitative services such as therapy and mental health rehabilitation."),
    ("F-0407", "Specialized Rehab Services by Qualified Personnel", "Provide specialized rehabilitative services under a physician's order by qualified personnel."),
];

const LEGACY_DENTAL_SERVICES: &[Row] = &[
    ("F-0411", "Routine/Emergency Dental Services in SNFs", "Assist skilled nursing residents in obtaining routine and emergency dental care."),
    ("F-0412", "Routine/Emergency Dental Services in NFs", "Provide or obtain routine and emergency dental services for nursing facility residents."),
];

const LEGACY_PHARMACY_SERVICES: &[Row] = &[
    ("F-0425", "Pharmaceutical Services - Accurate Procedures, RPh", "Provide pharmaceutical services with accurate acquisition, dispensing and administration under a licensed pharmacist."),
    ("F-0428", "Drug Regimen Review, Report Irregularities, Act On", "Have a pharmacist review each drug regimen monthly and act on reported irregularities."),
    ("F-0431", "Drug Records, Label/Store Drugs and Biologicals", "Keep drug records and label and store drugs and biologicals properly."),
];

const LEGACY_INFECTION_CONTROL: &[Row] = &[
    ("F-0441", "Infection Control, Prevent Spread, Linens", "Maintain an infection control program that investigates, controls and prevents infections, including linen handling."),
];

const LEGACY_PHYSICAL_ENVIRONMENT: &[Row] = &[
    ("F-0454", "Life Safety from Fire", "Meet the applicable provisions of the Life Safety Code."),
    ("F-0455", "Emergency Electrical Power System", "Provide an emergency electrical power system for lighting, alarms and life support."),
    ("F-0456", "Essential Equipment, Safe Operating Condition", "Keep essential mechanical, electrical and patient care equipment in safe operating condition."),
    ("F-0457", "Number of Residents per Room", "Accommodate no more than four residents in a bedroom."),
    ("F-0458", "Bedrooms Measure at Least 80 Sq Ft/Resident", "Provide at least 80 square feet per resident in multiple rooms."),
    ("F-0459", "Bedrooms Have Direct Access to Exit Corridor", "Give each bedroom direct access to an exit corridor."),
    ("F-0460", "Bedrooms Assure Full Visual Privacy", "Design or equip bedrooms to assure full visual privacy."),
    ("F-0461", "Resident Room Window to Outside/At or Above Grade", "Provide bedrooms with a window to the outside and floors at or above grade."),
    ("F-0462", "Resident Room Bed/Furniture/Closet", "Furnish each bedroom with a suitable bed, bedding, furniture and closet space."),
    ("F-0463", "Resident Call System - Rooms/Toilet/Bath", "Equip rooms, toilets and bathing facilities with a communication system to nursing staff."),
    ("F-0464", "Requirements for Dining and Activity Rooms", "Provide well-lighted, ventilated dining and activity rooms with adequate space."),
    ("F-0465", "Safe/Functional/Sanitary/Comfortable Environment", "Provide a safe, functional, sanitary and comfortable environment."),
    ("F-0466", "Procedures to Ensure Water Availability", "Have written procedures to ensure water is available when the supply is interrupted."),
    ("F-0467", "Proper Ventilation, Window/Mechanical", "Provide adequate outside ventilation by windows or mechanical means."),
    ("F-0468", "Corridors Have Firmly Secured Handrails", "Equip corridors with firmly secured handrails on each side."),
    ("F-0469", "Maintains Effective Pest Control Program", "Maintain an effective pest control program so the facility is free of pests and rodents."),
];

const LEGACY_ADMINISTRATION: &[Row] = &[
    ("F-0490", "Effective Administration/Resident Well-Being", "Administer the facility to use resources effectively to attain each resident's highest well-being."),
    ("F-0492", "Comply with Federal/State/Local Laws/Professional Standards", "Operate in compliance with applicable laws, regulations and professional standards."),
    ("F-0493", "Governing Body - Facility Policies/Appoint Administrator", "Have a governing body that adopts policies and appoints a licensed administrator."),
    ("F-0494", "Nurse Aide Competency/Training", "Use nurse aides only after a training and competency evaluation program."),
    ("F-0495", "Nurse Aide: No More than 4 Months unless Competent", "Do not use an individual as a nurse aide for more than four months unless competent."),
    ("F-0496", "Nurse Aide Registry Verification, Retraining", "Verify the nurse aide registry before hire and retrain after 24 months without service."),
    ("F-0497", "Nurse Aide Performance Review - 12 Hr/Yr In-Service", "Review nurse aide performance yearly and provide at least 12 hours of in-service education."),
    ("F-0498", "Proficiency of Nurse Aides", "Ensure nurse aides demonstrate competency in skills needed to care for residents."),
    ("F-0499", "Staff Qualifications", "Employ professional staff licensed, certified or registered under state law."),
    ("F-0500", "Outside Professional Resources - Arrangement/Agreement", "Have written agreements for services furnished by outside resources."),
    ("F-0501", "Responsibilities of Medical Director", "Designate a medical director responsible for resident care policies and medical care."),
    ("F-0514", "Resident Records - Complete/Accurate/Accessible", "Maintain complete, accurately documented, readily accessible clinical records."),
    ("F-0515", "Retention of Resident Records", "Retain clinical records for the period required by state law."),
    ("F-0516", "Safeguard Resident Record Information", "Safeguard clinical record information against loss, destruction or unauthorized use."),
    ("F-0517", "Written Plans for Emergencies/Staff Training", "Have detailed written plans and procedures to meet all potential emergencies."),
    ("F-0518", "Train All Staff - Emergency Procedures/Drills", "Train all employees in emergency procedures and conduct unannounced drills."),
    ("F-0519", "Transfer Agreement with Hospital", "Have a written transfer agreement with one or more hospitals."),
    ("F-0521", "Disclosure of Ownership Requirements", "Disclose ownership and changes in key management to the state agency."),
    ("F-0522", "Facility Closure - Administrator Duties", "Give required written notice and plan for relocation before a facility closure."),
];

const LEGACY_DIAGNOSTIC_SERVICES: &[Row] = &[
    ("F-0502", "Administration - Laboratory Services", "Provide or obtain laboratory services to meet resident needs."),
    ("F-0503", "Lab Services Only from Approved/Certified Lab", "Obtain laboratory services only from approved or certified laboratories."),
    ("F-0504", "Lab Services Only When Ordered by Physician", "Provide laboratory services only when ordered by the attending physician."),
    ("F-0505", "Promptly Notify Physician of Lab Results", "Promptly notify the attending physician of laboratory findings."),
    ("F-0506", "Provide Transport to Lab Service", "Assist the resident with transportation to and from laboratory services."),
    ("F-0507", "Lab Reports in Record - Lab Name, Address, Date", "File signed and dated laboratory reports in the clinical record."),
    ("F-0508", "Radiology/Diagnostic Services - Obtain/Provide", "Provide or obtain radiology and other diagnostic services to meet resident needs."),
    ("F-0509", "Radiology/Other Diagnostic Services Meet Needs", "Ensure radiology and other diagnostic services meet applicable conditions."),
    ("F-0510", "Radiology/Diagnostic Services - Ordered by Physician", "Provide radiology and other diagnostic services only when ordered by a physician."),
    ("F-0511", "Promptly Notify Physician of Radiology/Diagnostic Results", "Promptly notify the attending physician of radiology and diagnostic findings."),
    ("F-0512", "Transportation to Radiology/Other Diagnostic Services", "Assist the resident with transportation to and from radiology services."),
    ("F-0513", "Radiology/Diagnostic Reports in Record", "File signed and dated radiology and diagnostic reports in the clinical record."),
];

const LEGACY_QAPI: &[Row] = &[
    ("F-0520", "QAA Committee - Members/Meet Quarterly/Plans", "Maintain a quality assessment and assurance committee that meets at least quarterly."),
];

// K-tags from the 2000 edition of the Life Safety Code, used through 2016.

const LEGACY_LIFE_SAFETY: &[Row] = &[
    ("K-0011", "Building Separation - Multiple Occupancies", "Separate the health care occupancy from other occupancies by rated construction."),
    ("K-0012", "Building Construction Type", "Meet the minimum construction type for the building height."),
    ("K-0015", "Interior Finish - Flame Spread", "Use interior wall and ceiling finish with the required flame spread rating."),
    ("K-0017", "Corridor Wall Construction", "Separate corridors from use areas by walls that limit smoke transfer."),
    ("K-0018", "Corridor Doors", "Ensure corridor doors resist smoke passage and have positive latching."),
    ("K-0020", "Vertical Openings", "Enclose stairways, elevator shafts and other vertical openings."),
    ("K-0021", "Doors with Hold-Open Devices", "Arrange hold-open doors to release automatically on alarm."),
    ("K-0025", "Smoke Barrier Construction", "Construct smoke barriers with the required fire resistance rating."),
    ("K-0027", "Smoke Barrier Doors", "Equip smoke barrier doors to close and resist smoke passage."),
    ("K-0029", "Hazardous Areas - Separation", "Protect hazardous areas by fire-rated separation or sprinklers."),
    ("K-0038", "Exit Access", "Keep exit access readily accessible at all times."),
    ("K-0045", "Illumination of Means of Egress", "Continuously illuminate the means of egress."),
    ("K-0046", "Emergency Lighting", "Provide emergency lighting of at least 1.5 hours duration."),
    ("K-0047", "Exit Signs", "Mark exit and exit access with approved illuminated signs."),
    ("K-0050", "Fire Drills", "Conduct fire drills quarterly on each shift under varied conditions."),
    ("K-0051", "Fire Alarm System", "Provide a fire alarm system with manual and automatic initiation."),
    ("K-0052", "Fire Alarm Testing and Maintenance", "Test and maintain the fire alarm system and keep records."),
    ("K-0054", "Smoke Detectors", "Install, test and maintain smoke detectors."),
    ("K-0056", "Automatic Sprinkler System", "Protect the building with a complete automatic sprinkler system."),
    ("K-0062", "Sprinkler System Maintenance", "Inspect, test and maintain sprinkler systems."),
    ("K-0064", "Portable Fire Extinguishers", "Provide and maintain portable fire extinguishers."),
    ("K-0066", "Smoking Regulations", "Adopt and enforce smoking regulations."),
    ("K-0067", "Heating, Ventilating, and Air Conditioning", "Install and maintain HVAC systems in accordance with code."),
    ("K-0069", "Cooking Facilities", "Protect cooking equipment with hood, duct and extinguishing systems."),
    ("K-0070", "Portable Space Heating Devices", "Prohibit portable space heaters except permitted types."),
    ("K-0072", "Means of Egress - Obstructions", "Keep means of egress free of furnishings, decorations and other obstructions."),
    ("K-0074", "Draperies, Curtains, and Furnishings", "Use flame-resistant draperies, curtains and furnishings."),
    ("K-0076", "Medical Gas Storage", "Store medical gases in accordance with code."),
    ("K-0130", "Miscellaneous", "Meet life safety requirements not otherwise listed."),
    ("K-0144", "Generators - Inspection and Testing", "Inspect generators weekly and test them monthly under load."),
    ("K-0147", "Electrical Wiring and Equipment", "Install and maintain electrical wiring and equipment per the electrical code."),
];
