pub use finals::*;
pub use initials::*;
pub use nuclei::*;

mod initials {
    // /w/ is listed with the labialized onsets: it patterns like a labialized /ʔ/.
    pub const ONSETS: &str = "\
symbol,class,features
ʔ,onset,
ɓ,onset,
m,onset,
v,onset,
f,onset,
ɗ,onset,
t,onset,
tʰ,onset,
n,onset,
z,onset,
s,onset,
ʈ,onset,
ʑ,onset,
ʂ,onset,
c,onset,
ɲ,onset,
k,onset,
ɣ,onset,
x,onset,
ŋ,onset,
l,onset,
r,onset,
j,onset,
h,onset,
ɗw,labialized-onset,
tw,labialized-onset,
tʰw,labialized-onset,
sw,labialized-onset,
zw,labialized-onset,
lw,labialized-onset,
rw,labialized-onset,
cw,labialized-onset,
ʂw,labialized-onset,
ɲw,labialized-onset,
ʈw,labialized-onset,
kw,labialized-onset,
xw,labialized-onset,
ɣw,labialized-onset,
ŋw,labialized-onset,
hw,labialized-onset,
w,labialized-onset,";
}

mod nuclei {
    // oː and ɔː are left out on purpose.
    pub const NUCLEI: &str = "\
symbol,class,features
aː,nucleus,
a,nucleus,closed-only
ɛ,nucleus,
e,nucleus,
ə,nucleus,closed-only
əː,nucleus,
ɔ,nucleus,unlabializable
o,nucleus,unlabializable
i,nucleus,
ɨ,nucleus,unlabializable
u,nucleus,unlabializable
iə,nucleus,
ɨə,nucleus,unlabializable
uə,nucleus,unlabializable";
}

mod finals {
    pub const CODAS: &str = "\
symbol,class,features
m,coda,nasal
n,coda,nasal
ŋ,coda,nasal
p,coda,obstruent
t,coda,obstruent
k,coda,obstruent
w,coda,glide
j,coda,palatal-glide";

    pub const TONES: &str = "\
symbol,class,features
1,tone,
2,tone,
3,tone,
4,tone,
5,tone,checked
6,tone,checked";
}
